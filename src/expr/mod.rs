pub mod generator;
pub mod printer;

use std::{error, fmt, io};
use quickcheck::{Arbitrary, Gen};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use self::generator::{generate_expression, MAX_DEPTH};
pub use self::printer::{print_expression, print_program};

/// Arbitrary trees are kept shallow; the node count grows exponentially with depth.
const MAX_ARBITRARY_DEPTH: usize = 8;

#[derive(Debug)]
pub enum Error {
    DepthTooLarge { depth: u32, max: u32 },
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DepthTooLarge { depth, max } => write!(
                f,
                "maximum depth {} is too large (at most {} is supported)",
                depth, max
            ),
            Error::Io(ref e) => write!(f, "failed to write expression: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::DepthTooLarge { .. } => None,
            Error::Io(ref e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

/// Checks a requested depth against `MAX_DEPTH`.
pub fn check_depth(depth: u32) -> Result<u32, Error> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthTooLarge {
            depth: depth,
            max: MAX_DEPTH,
        });
    }
    Ok(depth)
}

/// A numeric literal at the bottom of an expression tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Int(n) => write!(f, "{}", n),
            // Shortest round-trip form, e.g. `0.25`, `0.0` or `1e-5`.
            Value::Real(x) => write!(f, "{:?}", x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                UnaryOperator::Negate => "neg",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 3] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
    ];
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                BinaryOperator::Add => "add",
                BinaryOperator::Subtract => "sub",
                BinaryOperator::Multiply => "mult",
            }
        )
    }
}

/// A generated arithmetic expression. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Leaf(Value),
    Unary(UnaryOperator, Box<Expr>),
    Binary(BinaryOperator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn leaf(value: Value) -> Expr {
        Expr::Leaf(value)
    }

    pub fn unary(operator: UnaryOperator, child: Expr) -> Expr {
        Expr::Unary(operator, Box::new(child))
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(operator, Box::new(left), Box::new(right))
    }

    /// Length of the longest path from this node to a leaf. A leaf has depth 0.
    pub fn depth(&self) -> u32 {
        match *self {
            Expr::Leaf(_) => 0,
            Expr::Unary(_, ref child) => 1 + child.depth(),
            Expr::Binary(_, ref left, ref right) => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match *self {
            Expr::Leaf(_) => 1,
            Expr::Unary(_, ref child) => child.leaf_count(),
            Expr::Binary(_, ref left, ref right) => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn binary_count(&self) -> usize {
        match *self {
            Expr::Leaf(_) => 0,
            Expr::Unary(_, ref child) => child.binary_count(),
            Expr::Binary(_, ref left, ref right) => {
                1 + left.binary_count() + right.binary_count()
            }
        }
    }

    /// Number of lines the printer emits for this tree. Unary operators share
    /// a line with their operand.
    pub fn line_count(&self) -> usize {
        self.leaf_count() + self.binary_count()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = Vec::new();
        print_expression(&mut buf, self, 0, true).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Expr {
        let max_depth = g.size().min(MAX_ARBITRARY_DEPTH) as u32;
        let depth = u32::arbitrary(g) % (max_depth + 1);
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        generate_expression(&mut rng, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Expr>> {
        match *self {
            Expr::Leaf(_) => quickcheck::empty_shrinker(),
            Expr::Unary(_, ref child) => quickcheck::single_shrinker((**child).clone()),
            Expr::Binary(_, ref left, ref right) => {
                Box::new(vec![(**left).clone(), (**right).clone()].into_iter())
            }
        }
    }
}
