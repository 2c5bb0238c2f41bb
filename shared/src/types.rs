/// Which side of the frame boundary a party lives on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartyType {
    Host,
    Embedded,
}

impl PartyType {
    pub fn name(&self) -> &'static str {
        match self {
            PartyType::Host => "host",
            PartyType::Embedded => "embedded",
        }
    }
}
