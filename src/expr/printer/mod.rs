use std::io::{self, Write};
use super::Expr;

/// Header line the consuming interpreter expects before the expression.
pub const PROGRAM_HEADER: &str = "print";

/// Writes `expr` as an indented tree, one leaf or binary operator per line.
///
/// With `newline` set the node starts its own line indented by `indent`
/// spaces; otherwise it continues the current line after a single space.
pub fn print_expression<W: Write>(
    out: &mut W,
    expr: &Expr,
    indent: usize,
    newline: bool,
) -> io::Result<()> {
    let spacing = if newline { indent } else { 1 };
    match *expr {
        Expr::Leaf(ref value) => writeln!(out, "{:width$}{}", "", value, width = spacing),
        Expr::Unary(ref operator, ref child) => {
            write!(out, "{:width$}{}", "", operator, width = spacing)?;
            print_expression(out, child, indent + 1, false)
        }
        Expr::Binary(ref operator, ref left, ref right) => {
            writeln!(out, "{:width$}{}", "", operator, width = spacing)?;
            print_expression(out, left, indent + 1, true)?;
            print_expression(out, right, indent + 1, true)
        }
    }
}

/// Writes the `print` header followed by the whole tree.
pub fn print_program<W: Write>(out: &mut W, expr: &Expr) -> io::Result<()> {
    writeln!(out, "{}", PROGRAM_HEADER)?;
    print_expression(out, expr, 0, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{BinaryOperator, UnaryOperator, Value};
    use quickcheck::{Gen, QuickCheck};

    fn int(n: i64) -> Expr {
        Expr::leaf(Value::Int(n))
    }

    fn render(expr: &Expr, indent: usize, newline: bool) -> String {
        let mut buf = Vec::new();
        print_expression(&mut buf, expr, indent, newline).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn leaf_is_indented() {
        assert_eq!(render(&int(5), 0, true), "5\n");
        assert_eq!(render(&int(5), 3, true), "   5\n");
        assert_eq!(render(&int(5), 3, false), " 5\n");
        assert_eq!(render(&Expr::leaf(Value::Real(0.5)), 1, true), " 0.5\n");
    }

    #[test]
    fn binary_children_start_new_lines() {
        let expr = Expr::binary(BinaryOperator::Add, int(3), int(4));
        assert_eq!(render(&expr, 0, true), "add\n 3\n 4\n");
    }

    #[test]
    fn unary_operand_shares_the_line() {
        let expr = Expr::unary(UnaryOperator::Negate, int(5));
        assert_eq!(render(&expr, 0, true), "neg 5\n");
    }

    #[test]
    fn nested_tree() {
        let expr = Expr::binary(
            BinaryOperator::Multiply,
            Expr::unary(
                UnaryOperator::Negate,
                Expr::binary(BinaryOperator::Subtract, int(1), int(-2)),
            ),
            int(9),
        );
        assert_eq!(
            render(&expr, 0, true),
            "mult\n neg sub\n   1\n   -2\n 9\n"
        );
    }

    #[test]
    fn program_starts_with_header() {
        let mut buf = Vec::new();
        print_program(&mut buf, &int(12)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "print\n12\n");
    }

    fn line_count_property(expr: Expr) -> bool {
        render(&expr, 0, true).lines().count() == expr.line_count()
    }

    fn deterministic_property(expr: Expr) -> bool {
        render(&expr, 0, true) == render(&expr.clone(), 0, true)
    }

    #[test]
    fn one_line_per_leaf_or_binary() {
        for size in 1..9 {
            let mut qc = QuickCheck::new().gen(Gen::new(size));
            qc.quickcheck(line_count_property as fn(Expr) -> bool);
        }
    }

    #[test]
    fn printing_is_deterministic() {
        for size in 1..9 {
            let mut qc = QuickCheck::new().gen(Gen::new(size));
            qc.quickcheck(deterministic_property as fn(Expr) -> bool);
        }
    }
}
