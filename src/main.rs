fn main() {
    if let Err(e) = keymaze::solver() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
