use super::{Polynomial, EPS};
use std::fmt;

/// Fixed six-decimal formatting with trailing zeros trimmed.
fn format_coef(value: f64) -> String {
    let mut s = format!("{:.6}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for term in self.terms() {
            let (c, e) = (term.coef, term.exp);

            if !first {
                f.write_str(if c >= 0.0 { "+" } else { "-" })?;
            } else if c < 0.0 {
                f.write_str("-")?;
            }

            let abs = c.abs();
            if e == 0 {
                write!(f, "{}", format_coef(abs))?;
            } else if (abs - 1.0).abs() < EPS {
                // coefficient 1 or -1: omit the number
                if e == 1 {
                    f.write_str("x")?;
                } else {
                    write!(f, "x^{}", e)?;
                }
            } else if e == 1 {
                write!(f, "{}x", format_coef(abs))?;
            } else {
                write!(f, "{}x^{}", format_coef(abs), e)?;
            }

            first = false;
        }
        Ok(())
    }
}

impl Polynomial {
    /// Renders the polynomial with exponents as `<sup>` elements.
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return "0".to_string();
        }

        let mut html = String::new();
        let mut first = true;
        for term in self.terms() {
            let (c, e) = (term.coef, term.exp);

            if !first && c > 0.0 {
                html.push('+');
            }
            if c < 0.0 {
                html.push('-');
            }

            let abs = c.abs();
            if e == 0 {
                html.push_str(&format_coef(abs));
            } else if (abs - 1.0).abs() < EPS {
                if e == 1 {
                    html.push('x');
                } else {
                    html.push_str(&format!("x<sup>{}</sup>", e));
                }
            } else if e == 1 {
                html.push_str(&format_coef(abs));
                html.push('x');
            } else {
                html.push_str(&format!("{}x<sup>{}</sup>", format_coef(abs), e));
            }

            first = false;
        }
        html
    }
}
