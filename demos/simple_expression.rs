use log::debug;
use multicalc_rs::expr::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expression = "(2 + 3) * 4 - 10 / 5";

    let mut evaluator = Evaluator::new(16);
    let postfix = evaluator
        .compile_expression(expression)
        .expect("Failed to compile");
    debug!("postfix: {postfix:?}");

    match evaluator.evaluate_postfix(&postfix) {
        Ok(result) => println!("{expression} = {result}"),
        Err(err) => println!("Error: {err}"),
    }
}
