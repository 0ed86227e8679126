use std::env;
use std::io;

fn main() {
    let user = env::var("USER").unwrap_or_else(|_| "there".to_string());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let stdout = io::stdout();
    monkey::repl::run(stdin.lock(), stdout.lock()).unwrap();
}
