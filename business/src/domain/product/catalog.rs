use rust_decimal::Decimal;

use super::errors::ProductError;
use super::model::{NewProductProps, Product};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=";

fn entry(
    id: u32,
    name: &str,
    cents: i64,
    category: &str,
    image_text: &str,
    description: &str,
) -> Result<Product, ProductError> {
    Product::new(NewProductProps {
        id,
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: description.to_string(),
        category: category.to_string(),
        image: format!("{PLACEHOLDER_IMAGE}{image_text}"),
    })
}

/// The fixed demo catalog shipped with the application. Every entry goes
/// through [`Product::new`], so a malformed entry surfaces as an error.
pub fn default_catalog() -> Result<Vec<Product>, ProductError> {
    Ok(vec![
        entry(
            1,
            "Wireless Headphones",
            9999,
            "Electronics",
            "Headphones",
            "High quality wireless headphones with noise cancellation and long battery life. Perfect for music lovers and professionals who need crystal clear audio.",
        )?,
        entry(
            2,
            "Smart Watch",
            19999,
            "Electronics",
            "Smart+Watch",
            "Feature-packed smart watch with health tracking, GPS and water resistance. Track your fitness goals and stay connected on the move.",
        )?,
        entry(
            3,
            "Laptop Stand",
            2999,
            "Accessories",
            "Laptop+Stand",
            "Ergonomic laptop stand made of premium aluminium with adjustable height. Improves posture and comfort at your desk.",
        )?,
        entry(
            4,
            "USB-C Hub",
            4999,
            "Accessories",
            "USB+Hub",
            "Multi-port USB-C hub with HDMI, USB 3.0 and fast charging. Expand the connectivity of your devices effortlessly.",
        )?,
        entry(
            5,
            "Bluetooth Speaker",
            7999,
            "Audio",
            "Speaker",
            "Portable Bluetooth speaker with 360 degree sound and a water resistant design. Take your music anywhere with premium sound.",
        )?,
        entry(
            6,
            "Gaming Mouse",
            5999,
            "Gaming",
            "Gaming+Mouse",
            "High precision gaming mouse with customisable RGB lighting and programmable buttons. Level up your in-game performance.",
        )?,
        entry(
            7,
            "Phone Case",
            1999,
            "Accessories",
            "Phone+Case",
            "Durable phone case with military grade protection and wireless charging support. Keep your device safe and stylish.",
        )?,
        entry(
            8,
            "Tablet",
            29999,
            "Electronics",
            "Tablet",
            "Lightweight tablet with a high resolution display for work and entertainment. Productivity and fun in a single device.",
        )?,
        entry(
            9,
            "Mechanical Keyboard",
            12999,
            "Gaming",
            "Keyboard",
            "Premium mechanical keyboard with backlit keys and tactile switches. Perfect for gaming and professional typing.",
        )?,
        entry(
            10,
            "HD Webcam",
            8999,
            "Electronics",
            "Webcam",
            "High definition webcam with autofocus and a built-in microphone. Ideal for video calls and content creation.",
        )?,
        entry(
            11,
            "Portable Battery",
            3999,
            "Accessories",
            "Portable+Battery",
            "Portable battery with fast charging technology and support for several devices. Never run out of battery again.",
        )?,
        entry(
            12,
            "Wireless Charger",
            2499,
            "Accessories",
            "Wireless+Charger",
            "Fast wireless charging pad compatible with every Qi enabled device. A convenient cable-free charging solution.",
        )?,
    ])
}
