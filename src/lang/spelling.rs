use super::ast::Register;

/// Every construct that rotates through spellings owns exactly one counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Label0,
    Label1,
    Label2,
    FamilyA,
    FamilyB,
    Stderr,
    Bracket,
    Uniq,
    Hello,
    Slice,
}

impl Table {
    pub const COUNT: usize = 10;

    fn index(self) -> usize {
        self as usize
    }
}

/// Occurrence counters, one per `Table`, all zero at the start of a parse.
#[derive(Debug, Default, Clone)]
pub struct Counters([usize; Table::COUNT]);

impl Counters {
    pub fn get(&self, table: Table) -> usize {
        self.0[table.index()]
    }

    /// Returns the count before incrementing.
    pub fn bump(&mut self, table: Table) -> usize {
        let n = self.0[table.index()];
        self.0[table.index()] += 1;
        n
    }
}

/// ## Cyclic spelling table
///
/// The Nth consultation of a table accepts only the variant at
/// `N mod len`. Callers look at `current` and `bump` on a match.

pub struct Cyclic<T: 'static> {
    pub table: Table,
    variants: &'static [T],
}

impl<T: 'static> Cyclic<T> {
    pub const fn new(table: Table, variants: &'static [T]) -> Cyclic<T> {
        Cyclic { table, variants }
    }

    pub fn current(&self, counters: &Counters) -> &'static T {
        &self.variants[counters.get(self.table) % self.variants.len()]
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.variants.len()
    }
}

pub const LABELS: [Cyclic<&str>; 3] = [
    Cyclic::new(Table::Label0, &["0.0f", "++i", "<>", "Object"]),
    Cyclic::new(
        Table::Label1,
        &["std::ignore", "nullptr", "__dict__", "void(0)"],
    ),
    Cyclic::new(Table::Label2, &["$ARGV", "*read-eval*", "FS", "()"]),
];

pub const ANONYMOUS_LABEL: &str = "t";

pub const FAMILY_A: Cyclic<(&str, &str)> = Cyclic::new(
    Table::FamilyA,
    &[
        ("usestrictqw/", "/;"),
        ("SETLOCAL", ""),
        ("import", ";"),
        ("CFLAGS=", ""),
        ("\\emph{", "}"),
        ("`cat", "`"),
    ],
);

pub const FAMILY_B: Cyclic<(&str, &str)> = Cyclic::new(
    Table::FamilyB,
    &[
        ("s/", "//g"),
        ("OUTPUT=", ""),
        ("guard", ""),
        ("lambda:", ""),
        ("\"\"\"", "\"\"\""),
    ],
);

/// Register keys in the order they are tried, each with its own rotation.
pub const REGISTER_KEYS: [(&str, Cyclic<Register>); 3] = [
    (
        "STDERR",
        Cyclic::new(Table::Stderr, &[Register::A, Register::C, Register::E]),
    ),
    (
        "$[",
        Cyclic::new(Table::Bracket, &[Register::C, Register::E, Register::A]),
    ),
    (
        "`uniq-c`",
        Cyclic::new(Table::Uniq, &[Register::E, Register::A, Register::C]),
    ),
];

/// Literals that evaluate to how many times they appeared before.
pub const INCREMENTS: [(&str, Table); 2] = [
    ("\"Hello,world!\"", Table::Hello),
    ("arr[:]", Table::Slice),
];
