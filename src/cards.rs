use std::fmt;
use std::str::FromStr;

/// Card faces in deck order, Ace (0) through King (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Ace,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Face::Ace => "A",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceParseError {
    #[error("invalid face: '{0}'")]
    Invalid(String),
}

impl FromStr for Face {
    type Err = FaceParseError;

    /// Accepts only the exact symbols used for display (`A`, `2`..`10`, `J`, `Q`, `K`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .iter()
            .copied()
            .find(|face| face.symbol() == s)
            .ok_or_else(|| FaceParseError::Invalid(s.to_string()))
    }
}

/// Four suits in deck order: Hearts, Diamonds, Spades, Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Spades = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'S' => Ok(Suit::Spades),
            'C' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: face + suit, tagged with its slot in a freshly sorted deck.
///
/// ```
/// use clairvoyant::cards::{Card, Face, Suit};
///
/// let card = Card::new(Face::Ten, Suit::Diamonds);
/// assert_eq!(card.to_string(), "10D");
/// assert_eq!(card.original_index(), 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    face: Face,
    original_index: u8,
}

impl Card {
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { suit, face, original_index: suit.ordinal() * Face::COUNT as u8 + face.ordinal() }
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Position of this card in a sorted deck (`suit * 13 + face`).
    pub const fn original_index(self) -> u8 {
        self.original_index
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Face(#[from] FaceParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Strict inverse of `Display`: case-sensitive, no surrounding whitespace.
    ///
    /// ```
    /// use clairvoyant::cards::{Card, Face, Suit};
    ///
    /// assert_eq!("QS".parse::<Card>().unwrap(), Card::new(Face::Queen, Suit::Spades));
    /// assert!("qs".parse::<Card>().is_err());
    /// assert!(" QS".parse::<Card>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // suit is the last char; everything before it is the face symbol
        let Some(suit_ch) = s.chars().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let face_str = &s[..s.len() - suit_ch.len_utf8()];
        if face_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let face = Face::from_str(face_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(face, suit))
    }
}
