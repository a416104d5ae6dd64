use stackcalc_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expressions: Vec<String> = (1..=10)
        .map(|i| format!("({i} + 0.5) * {i} - {i} / 4"))
        .chain(["1 +".to_string(), "(2".to_string()])
        .collect();

    let evaluator = Evaluator::new();
    let results = evaluator.evaluate_batch(&expressions);
    for (expression, result) in expressions.iter().zip(results) {
        match result {
            Ok(value) => println!("{expression} = {value}"),
            Err(err) => println!("{expression}: error: {err}"),
        }
    }
}
