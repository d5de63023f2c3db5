use log::debug;
use multicalc_rs::expr::Evaluator;
use multicalc_rs::polynomial::Polynomial;
use std::io::{self, BufRead, Write};

fn main() {
    pretty_env_logger::init();

    loop {
        println!("      Main Menu of Multi-Calculator");
        println!("1. Sparse Polynomial Calculator");
        println!("2. Expression Calculator");
        println!("enter 0 to quit");
        println!("==============================");
        println!("enter your choice");

        let Some(choice) = read_line() else { break };
        match choice.trim() {
            "1" => polynomial_menu(),
            "2" => expression_menu(),
            "0" => {
                println!("Quited");
                break;
            }
            _ => println!("Invalid input"),
        }
    }
}

fn expression_menu() {
    println!("Expression Calculator");
    println!("==============================");
    println!("input an expression(support + - * / ^ and parenthese): ");
    println!("input # to stop entering");

    let input = read_until_hash();
    debug!("raw expression input: {input:?}");

    let mut evaluator = Evaluator::new(16);
    match evaluator.evaluate_expression(&input) {
        Ok(result) => println!("outcome: {result}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

fn polynomial_menu() {
    let mut p1 = Polynomial::new();
    let mut p2 = Polynomial::new();

    loop {
        println!("Sparse Polynomial Calculator");
        println!("==============================");
        println!("1. input Polynomial 1");
        println!("2. input Polynomial 2");
        println!("3. display Polynomial");
        println!("4. output P1 + P2");
        println!("5. output P1 - P2");
        println!("6. output P1 * P2");
        println!("7. output Derivative");
        println!("8. calculate P(x)");
        println!("0. return Menu");
        println!("==============================");
        println!("enter your choice");

        let Some(choice) = read_line() else { return };
        match choice.trim() {
            "1" => {
                println!("Get Polynomial 1");
                p1 = input_polynomial();
            }
            "2" => {
                println!("Get Polynomial 2");
                p2 = input_polynomial();
            }
            "3" => {
                println!("Which polynomial do you want to display ?");
                match selected_polynomial(&p1, &p2) {
                    Some((name, poly)) => println!("{name}(x) = {poly}"),
                    None => println!("invalid input"),
                }
            }
            "4" => println!("P1 + P2 = {}", &p1 + &p2),
            "5" => println!("P1 - P2 = {}", &p1 - &p2),
            "6" => println!("P1 * P2 = {}", &p1 * &p2),
            "7" => {
                println!("Which polynomial do you want to derivative ?");
                match selected_polynomial(&p1, &p2) {
                    Some((name, poly)) => println!("{name}'(x) = {}", poly.derivative()),
                    None => println!("invalid input"),
                }
            }
            "8" => {
                println!("Which polynomial do you want to deal ?");
                match selected_polynomial(&p1, &p2) {
                    Some((name, poly)) => {
                        let x = read_f64("input x : ");
                        println!("{name}({x}) = {}", poly.evaluate_at(x));
                    }
                    None => println!("invalid input"),
                }
            }
            "0" => return,
            _ => println!("invalid input"),
        }
    }
}

/// Reads terms until the `#` sentinel, retrying on unparseable input.
fn input_polynomial() -> Polynomial {
    let mut poly = Polynomial::new();
    println!("Input terms for the polynomial (enter '#' to stop):");
    loop {
        print_prompt("exponent: ");
        let Some(line) = read_line() else { break };
        let word = line.trim();
        if word == "#" {
            break;
        }
        let exp: i32 = match word.parse() {
            Ok(exp) => exp,
            Err(_) => {
                println!("Invalid input. Please enter an integer exponent or '#' to stop.");
                continue;
            }
        };
        let coef = read_f64(&format!("coefficient of x^{exp}: "));
        poly.insert_term(coef, exp);
    }
    poly
}

fn selected_polynomial<'a>(
    p1: &'a Polynomial,
    p2: &'a Polynomial,
) -> Option<(&'static str, &'a Polynomial)> {
    match read_line()?.trim() {
        "1" => Some(("P1", p1)),
        "2" => Some(("P2", p2)),
        _ => None,
    }
}

fn read_f64(prompt: &str) -> f64 {
    loop {
        print_prompt(prompt);
        let Some(line) = read_line() else { return 0.0 };
        match line.trim().parse() {
            Ok(value) => return value,
            Err(_) => println!("Invalid number. Try again."),
        }
    }
}

/// Accumulates raw input up to (not including) the first `#`.
fn read_until_hash() -> String {
    let mut input = String::new();
    while let Some(line) = read_line() {
        if let Some(pos) = line.find('#') {
            input.push_str(&line[..pos]);
            break;
        }
        input.push_str(&line);
    }
    input
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn print_prompt(prompt: &str) {
    print!("{prompt}");
    let _ = io::stdout().flush();
}
