use log::debug;
use stackcalc_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let expressions = if args.is_empty() {
        vec![
            "1 + 2 * 3".to_string(),
            "(1 + 2) * 3".to_string(),
            "-(2 + 3) / 0.5".to_string(),
            "3 --5".to_string(),
            "1 / 0".to_string(),
            "3.5.2".to_string(),
        ]
    } else {
        vec![args.join(" ")]
    };

    let evaluator = Evaluator::new();
    for expression in &expressions {
        debug!("input: {expression:?}");
        match evaluator.evaluate(expression) {
            Ok(result) => println!("{expression} = {result}"),
            Err(err) => println!("{expression}: error: {err}"),
        }
    }
}
