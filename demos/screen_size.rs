use screensize::{Platform, get_screen_size};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Backend: {}", Platform::current());
    match get_screen_size() {
        Ok(size) => println!("Primary display: {} ({} pixels)", size, size.area()),
        Err(error) => eprintln!("Error: {}", error),
    }
}
