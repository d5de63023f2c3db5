use multicalc_rs::expr::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expression = "2^3^2 + 12";

    let mut evaluator = Evaluator::new(16);
    let postfix = evaluator
        .compile_expression(expression)
        .expect("Failed to compile");

    // the compiled program can be evaluated any number of times
    for run in 0..3 {
        match evaluator.evaluate_postfix(&postfix) {
            Ok(result) => println!("Run {run}: {result}"),
            Err(err) => println!("Error: {err}"),
        }
    }
}
