use crate::models::Product;

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80")
}

fn sample(id: &str, name: &str, price: f64, description: &str, photos: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        images: photos.iter().map(|p| unsplash(p)).collect(),
        available: true,
    }
}

/// Demonstration catalog written on first run of the local store.
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(
            "1",
            "Elegant Evening Dress",
            299.0,
            "A stunning black evening dress perfect for special occasions. Made with premium silk fabric and featuring elegant draping. This timeless piece combines sophistication with comfort, making it ideal for formal events, dinner parties, or any special celebration where you want to make a lasting impression.",
            &[
                "1595777457583-95e059d581b8",
                "1566479179817-0e2f24d2a2b6",
                "1515372039744-b8f02a3ae446",
                "1539008835657-9e8e9680c956",
            ],
        ),
        sample(
            "2",
            "Summer Floral Midi",
            189.0,
            "Light and airy floral midi dress perfect for summer days. Features a flattering A-line silhouette and comfortable cotton blend. The beautiful floral print adds a touch of femininity while the midi length makes it versatile for both casual outings and semi-formal occasions.",
            &[
                "1572804013309-59a88b7e92f1",
                "1583396095519-b6c1a3b8b784",
                "1585487002537-16ab6f34e9d6",
            ],
        ),
        sample(
            "3",
            "Classic Little Black Dress",
            245.0,
            "Timeless little black dress that works for any occasion. Sleek design with modern cut and premium materials. This versatile piece can be dressed up with heels and jewelry for evening events or paired with a blazer for professional settings. A must-have staple for every wardrobe.",
            &[
                "1566479179817-0e2f24d2a2b6",
                "1595777457583-95e059d581b8",
                "1515372039744-b8f02a3ae446",
            ],
        ),
        sample(
            "4",
            "Bohemian Maxi Dress",
            325.0,
            "Free-spirited bohemian maxi dress with intricate patterns and flowing silhouette. Perfect for beach vacations, music festivals, or casual summer gatherings. The lightweight fabric moves beautifully with every step, while the unique print makes a bold fashion statement.",
            &[
                "1544441893-675973e31985",
                "1578662996442-48f60103fc96",
                "1585487002537-16ab6f34e9d6",
                "1572804013309-59a88b7e92f1",
            ],
        ),
        sample(
            "5",
            "Sophisticated Wrap Dress",
            275.0,
            "Elegant wrap dress that flatters all body types with its adjustable tie waist and flowing sleeves. Made from luxurious crepe fabric that drapes beautifully. Perfect for office wear, dinner dates, or any occasion where you want to look polished and put-together.",
            &[
                "1583396095519-b6c1a3b8b784",
                "1578662996442-48f60103fc96",
                "1544441893-675973e31985",
            ],
        ),
    ]
}
