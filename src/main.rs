fn main() {
    if let Err(e) = ymw16_query::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
