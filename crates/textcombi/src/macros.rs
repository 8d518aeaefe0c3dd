//! Helper macros

/// Helper to build sequences without collecting the parts into an array.
/// ```
/// # use textcombi::{core::{sequence, string}, seqs};
/// let a = seqs!(string("", "a"), string("", "b"));
/// // is equivalent to
/// let b = sequence("", [string("", "a"), string("", "b")]);
/// // and with an id
/// let c = seqs!("AB" => string("", "a"), string("", "b"));
/// ```
#[macro_export]
macro_rules! seqs {
    ($id:literal => $($p:expr),+ $(,)?) => {
        $crate::core::sequence($id, [$($p),+])
    };
    ($($p:expr),+ $(,)?) => {
        $crate::core::sequence("", [$($p),+])
    };
}

pub use seqs;

/// Helper to build longest-match choices.
/// ```
/// # use textcombi::{core::{choice, string}, choices};
/// let a = choices!(string("", "a"), string("", "ab"));
/// // is equivalent to
/// let b = choice("", [string("", "a"), string("", "ab")]);
/// ```
#[macro_export]
macro_rules! choices {
    ($id:literal => $($p:expr),+ $(,)?) => {
        $crate::core::choice($id, [$($p),+])
    };
    ($($p:expr),+ $(,)?) => {
        $crate::core::choice("", [$($p),+])
    };
}

pub use choices;

#[cfg(test)]
mod tests {
    use crate::{core::string, driver::parse};

    #[test]
    fn macros_build_combinators() {
        let ab = seqs!("AB" => string("A", "a"), choices!(string("B", "b"), string("BB", "bb")));
        let tk = parse("abb", &ab).unwrap();
        assert_eq!(tk.id, "AB");
        assert_eq!(tk.children()[1].id, "BB");
    }
}
