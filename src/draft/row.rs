/// One drafted player, after cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub person: String,
    /// College, footnote markers removed.
    pub origin: String,
    /// NFL team, parenthetical disambiguators removed.
    pub destination: String,
    pub year: i32,
    /// Overall pick number, when the table has one and it parses.
    pub rank: Option<u32>,
}
