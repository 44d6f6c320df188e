fn main() {
    match screensize::get_screen_size() {
        Ok(size) => match serde_json::to_string(&size) {
            Ok(json) => println!("{}", json),
            Err(error) => eprintln!("Error: {:?}", error),
        },
        Err(error) => eprintln!("Error: {:?}", error),
    }
}
