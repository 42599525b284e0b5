use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

static NAMED: [(Category, &str); 8] = [
    (Category::FOOD, "Food"),
    (Category::TRANSPORT, "Transport"),
    (Category::HOUSING, "Housing"),
    (Category::ENTERTAINMENT, "Entertainment"),
    (Category::HEALTHCARE, "Healthcare"),
    (Category::EDUCATION, "Education"),
    (Category::SALARY, "Salary"),
    (Category::OTHER, "Other"),
];

/// A set of spending/income tags stored as a bitmask.
///
/// Only the eight named bits are ever set; raw values are truncated on the
/// way in so every `Category` is a union of the constants below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Category(u8);

impl Category {
    pub const NONE: Self = Self(0);
    pub const FOOD: Self = Self(1);
    pub const TRANSPORT: Self = Self(1 << 1);
    pub const HOUSING: Self = Self(1 << 2);
    pub const ENTERTAINMENT: Self = Self(1 << 3);
    pub const HEALTHCARE: Self = Self(1 << 4);
    pub const EDUCATION: Self = Self(1 << 5);
    pub const SALARY: Self = Self(1 << 6);
    pub const OTHER: Self = Self(1 << 7);

    const ALL_BITS: u8 = 0xFF;

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Build a set from a raw value, dropping bits that name no category.
    pub fn from_bits_truncate(bits: u32) -> Self {
        Self((bits & u32::from(Self::ALL_BITS)) as u8)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is also set here.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two sets share at least one flag.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// The single flags set in `self`, in ascending bit order.
    pub fn iter(self) -> impl Iterator<Item = Self> {
        NAMED
            .iter()
            .map(|(flag, _)| *flag)
            .filter(move |flag| self.contains(*flag))
    }

    pub fn all() -> &'static [(Category, &'static str)] {
        &NAMED
    }

    fn name(self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Category picked from the expense menu; unknown input falls back to Other.
    pub fn from_expense_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::FOOD,
            "2" => Self::TRANSPORT,
            "3" => Self::HOUSING,
            "4" => Self::ENTERTAINMENT,
            "5" => Self::HEALTHCARE,
            "6" => Self::EDUCATION,
            _ => Self::OTHER,
        }
    }

    /// Category picked from the income menu; unknown input falls back to Other.
    pub fn from_income_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::SALARY,
            _ => Self::OTHER,
        }
    }

    /// One entry of the filter menu. Unknown input contributes nothing.
    pub fn from_filter_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::FOOD,
            "2" => Self::TRANSPORT,
            "3" => Self::HOUSING,
            "4" => Self::ENTERTAINMENT,
            "5" => Self::HEALTHCARE,
            "6" => Self::EDUCATION,
            "7" => Self::SALARY,
            "8" => Self::OTHER,
            _ => Self::NONE,
        }
    }

    /// Union of a comma-separated list of filter menu choices, e.g. `"1, 3,8"`.
    pub fn parse_filter(input: &str) -> Self {
        input
            .split(',')
            .map(Self::from_filter_choice)
            .fold(Self::NONE, |acc, flag| acc | flag)
    }
}

impl BitOr for Category {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Category {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Category {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Category {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL_BITS)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.pad("None");
        }
        let names: Vec<&str> = self.iter().filter_map(Category::name).collect();
        f.pad(&names.join(", "))
    }
}
