use log::debug;
use stackcalc_rs::{evaluate_tokens, tokenize};

fn main() {
    pretty_env_logger::init();

    let expression = "-(4 - 1.5) * 2 + 10 / 4";
    let tokens = tokenize(expression).expect("Failed to tokenize");

    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    debug!("tokens: {}", rendered.join(" "));

    // The token sequence is plain data and can be evaluated any number of times.
    for _ in 0..3 {
        match evaluate_tokens(tokens.clone()) {
            Ok(result) => println!("{expression} = {result}"),
            Err(err) => println!("Error: {err}"),
        }
    }
}
