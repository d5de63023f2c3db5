use multicalc_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "2 + 3 * 4",
        "(10 + 20) * 3 / (4 - 1) + 5",
        "2^3^2",
        "3/0",
    ];

    for (i, result) in evaluate_batch(&expressions).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
