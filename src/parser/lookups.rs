use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// How strongly an operator grabs the operand on each side.
///
/// In `a R b Q c`, `b` goes to `Q` (giving `a R (b Q c)`) exactly when the
/// left strength of `Q` is greater than the right strength of `R`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BindingStrength {
    pub left: i32,
    pub right: i32,
}

impl BindingStrength {
    pub const fn new(left: i32, right: i32) -> Self {
        BindingStrength { left, right }
    }
}

/// Used for every operator missing from the table.
pub const DEFAULT_STRENGTH: BindingStrength = BindingStrength::new(-7, -7);

lazy_static! {
    pub static ref BINDING_STRENGTH_LOOKUP: HashMap<&'static str, BindingStrength> = {
        let mut map = HashMap::new();
        map.insert(".", BindingStrength::new(0, 0)); // attribute
        map.insert("!.", BindingStrength::new(0, 0)); // call with no arguments, then attribute
        map.insert("!", BindingStrength::new(0, -1)); // call with no arguments
        map.insert(":", BindingStrength::new(0, -1)); // keyword argument
        map.insert("", BindingStrength::new(-2, -2)); // call with an argument
        map.insert("!!", BindingStrength::new(-3, -3)); // subscript
        map.insert("**", BindingStrength::new(-3, -4));
        map.insert("*", BindingStrength::new(-5, -5));
        map.insert("/", BindingStrength::new(-5, -5));
        map.insert("//", BindingStrength::new(-5, -5));
        map.insert("%", BindingStrength::new(-5, -5));
        map.insert("+", BindingStrength::new(-6, -6));
        map.insert("-", BindingStrength::new(-6, -6));
        // -7 is DEFAULT_STRENGTH
        map.insert("<", BindingStrength::new(-8, -8));
        map.insert("<=", BindingStrength::new(-8, -8));
        map.insert(">", BindingStrength::new(-8, -8));
        map.insert(">=", BindingStrength::new(-8, -8));
        map.insert("==", BindingStrength::new(-8, -8));
        map.insert("!=", BindingStrength::new(-8, -8));
        map.insert("is", BindingStrength::new(-8, -8));
        map.insert("in", BindingStrength::new(-8, -8));
        map.insert("<<", BindingStrength::new(-10, -10));
        map.insert(">>", BindingStrength::new(-10, -10));
        map.insert("&", BindingStrength::new(-11, -11));
        map.insert("^", BindingStrength::new(-12, -12));
        map.insert("|", BindingStrength::new(-13, -13));
        map.insert("and", BindingStrength::new(-14, -14));
        map.insert("or", BindingStrength::new(-15, -15));
        map.insert("$", BindingStrength::new(-15, -16)); // call with one argument, no parentheses
        map.insert("->", BindingStrength::new(1, -18)); // function
        map.insert(",", BindingStrength::new(-17, -17)); // tuple
        for assignment in [
            "=", "!!=", "+=", "-=", "*=", "**=", "/=", "//=", "%=", "&=", "^=", "|=", "<<=",
            ">>=", "where",
        ] {
            map.insert(assignment, BindingStrength::new(-17, -18));
        }
        map.insert("if", BindingStrength::new(-19, -20));
        map.insert("else", BindingStrength::new(-20, -21)); // always follows `a if b`
        map.insert("\n", BindingStrength::new(-23, -23)); // statement sequence
        map
    };

    /// `a R b R c` becomes one node `R(a, b, c)` instead of `R(R(a, b), c)`.
    pub static ref FLATTENED: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(",");
        set.insert("..");
        set.insert("::");
        set.insert("");
        set.insert("\n");
        set
    };

    /// Operators that never take a right-hand operand.
    pub static ref UNARY: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("!");
        set
    };
}

pub fn binding_strength(operator: &str) -> BindingStrength {
    BINDING_STRENGTH_LOOKUP
        .get(operator)
        .copied()
        .unwrap_or(DEFAULT_STRENGTH)
}

pub fn has_priority(operator: &str, other: &str) -> bool {
    binding_strength(operator).left > binding_strength(other).right
}

pub fn is_flattened(operator: &str) -> bool {
    FLATTENED.contains(operator)
}

pub fn is_unary(operator: &str) -> bool {
    UNARY.contains(operator)
}
