//! Session setup: seat validation, dealing and scripted tables.

use rustc_hash::FxHashSet;

use super::outcome::SetupError;
use super::session::{Seat, Session, Table};
use crate::cards::{Card, Deck, DiscardPile, DECK_SIZE};
use crate::core::{GameRng, MakaoConfig, Player, PlayerId, SeatKind, TurnDirection};
use crate::policy::{DecisionPolicy, GreedyPolicy};
use crate::rules::EffectState;

/// Seats a table can hold: every seat needs a distinct [`PlayerId`].
const MAX_SEATS: usize = u8::MAX as usize + 1;

/// A table laid out card by card instead of dealt.
///
/// Cards not named anywhere are shuffled into the deck beneath `deck_top`.
///
/// ```
/// use makao::cards::Card;
/// use makao::games::makao::{Arrangement, Session};
///
/// let card = |name: &str| name.parse::<Card>().unwrap();
/// let session = Session::builder()
///     .players(["Ann", "Bob"])
///     .seed(7)
///     .arrangement(
///         Arrangement::new(card("5 of Hearts"))
///             .hand([card("5 of Clubs"), card("9 of Spades")])
///             .hand([card("7 of Hearts"), card("8 of Diamonds")])
///             .deck_top([card("Q of Clubs")]),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(session.deck().peek(), Some(card("Q of Clubs")));
/// assert_eq!(session.cards_in_play(), 52);
/// ```
#[derive(Clone, Debug)]
pub struct Arrangement {
    hands: Vec<Vec<Card>>,
    top_card: Card,
    discard_under: Vec<Card>,
    deck_top: Vec<Card>,
    effects: EffectState,
    starting_seat: usize,
}

impl Arrangement {
    /// Start a table with `top_card` face up on the discard pile.
    #[must_use]
    pub fn new(top_card: Card) -> Self {
        Self {
            hands: Vec::new(),
            top_card,
            discard_under: Vec::new(),
            deck_top: Vec::new(),
            effects: EffectState::new(),
            starting_seat: 0,
        }
    }

    /// Add the next seat's hand.
    #[must_use]
    pub fn hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands.push(cards.into_iter().collect());
        self
    }

    /// Cards under the top of the discard pile, bottom first.
    #[must_use]
    pub fn discard_under(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.discard_under = cards.into_iter().collect();
        self
    }

    /// Cards on top of the deck; the first is drawn first.
    #[must_use]
    pub fn deck_top(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck_top = cards.into_iter().collect();
        self
    }

    /// Conditions already in force.
    #[must_use]
    pub fn effects(mut self, effects: EffectState) -> Self {
        self.effects = effects;
        self
    }

    #[must_use]
    pub fn starting_seat(mut self, seat: usize) -> Self {
        self.starting_seat = seat;
        self
    }

    fn named_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hands
            .iter()
            .flatten()
            .chain(&self.discard_under)
            .chain(&self.deck_top)
            .copied()
            .chain(std::iter::once(self.top_card))
    }
}

/// Builder for a [`Session`].
#[derive(Debug, Default)]
pub struct MakaoBuilder {
    names: Vec<String>,
    human_seat: Option<usize>,
    seed: Option<u64>,
    config: MakaoConfig,
    policies: Vec<(usize, Box<dyn DecisionPolicy>)>,
    direction: TurnDirection,
    arrangement: Option<Arrangement>,
}

impl MakaoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one seat.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add seats in order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make `seat` the interactive seat. Without one every seat is automated.
    pub fn human_seat(mut self, seat: usize) -> Self {
        self.human_seat = Some(seat);
        self
    }

    /// Fix the RNG seed. Without one the seed is drawn from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: MakaoConfig) -> Self {
        self.config = config;
        self
    }

    /// Drive an automated seat with `policy` instead of [`GreedyPolicy`].
    pub fn policy(mut self, seat: usize, policy: impl DecisionPolicy + 'static) -> Self {
        self.policies.push((seat, Box::new(policy)));
        self
    }

    pub fn direction(mut self, direction: TurnDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Lay the table out explicitly instead of dealing.
    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    /// Validate the seats, deal (or arrange) and start the first turn.
    pub fn build(self) -> Result<Session, SetupError> {
        let count = self.names.len();
        self.validate_seats()?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let mut players: Vec<Player> = self
            .names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let seat = if self.human_seat == Some(index) {
                    SeatKind::Interactive
                } else {
                    SeatKind::Automated
                };
                // Seat indices fit in a u8 once validate_seats has passed.
                Player::new(PlayerId::new(index as u8), name, seat)
            })
            .collect();

        let mut injected: Vec<Option<Box<dyn DecisionPolicy>>> = (0..count).map(|_| None).collect();
        for (seat, policy) in self.policies {
            injected[seat] = Some(policy);
        }
        let seats = injected
            .into_iter()
            .enumerate()
            .map(|(index, policy)| {
                if self.human_seat == Some(index) {
                    Seat::Interactive
                } else {
                    Seat::Automated(policy.unwrap_or_else(|| Box::new(GreedyPolicy)))
                }
            })
            .collect();

        let (deck, discard, effects, starting_seat) = match self.arrangement {
            Some(arrangement) => arrange(arrangement, &mut players, &mut rng)?,
            None => {
                let (deck, discard) = deal(&self.config, &mut players, &mut rng)?;
                (deck, discard, EffectState::new(), 0)
            }
        };

        Ok(Session::from_table(Table {
            config: self.config,
            rng,
            deck,
            discard,
            players,
            seats,
            effects,
            starting_seat,
            direction: self.direction,
        }))
    }

    fn validate_seats(&self) -> Result<(), SetupError> {
        let count = self.names.len();
        if count < self.config.min_players {
            return Err(SetupError::TooFewPlayers {
                count,
                min: self.config.min_players,
            });
        }
        if count > self.config.max_players {
            return Err(SetupError::TooManyPlayers {
                count,
                max: self.config.max_players,
            });
        }
        if count > MAX_SEATS {
            return Err(SetupError::TooManyPlayers {
                count,
                max: MAX_SEATS,
            });
        }
        if let Some(seat) = self.names.iter().position(|name| name.trim().is_empty()) {
            return Err(SetupError::EmptyName { seat });
        }
        if let Some(seat) = self.human_seat.filter(|&seat| seat >= count) {
            return Err(SetupError::SeatOutOfRange { seat, count });
        }
        for &(seat, _) in &self.policies {
            if seat >= count {
                return Err(SetupError::SeatOutOfRange { seat, count });
            }
            if self.human_seat == Some(seat) {
                return Err(SetupError::PolicyOnInteractiveSeat { seat });
            }
        }
        if self.arrangement.is_none() {
            let needed = self.config.hand_size * count + 1;
            if needed > DECK_SIZE {
                return Err(SetupError::HandsExceedDeck {
                    needed,
                    available: DECK_SIZE,
                });
            }
        }
        Ok(())
    }
}

/// Deal hands round-robin and turn up a plain first card.
///
/// A functional card turned up is put back and the deck reshuffled.
fn deal(
    config: &MakaoConfig,
    players: &mut [Player],
    rng: &mut GameRng,
) -> Result<(Deck, DiscardPile), SetupError> {
    let needed = config.hand_size * players.len() + 1;
    let short = SetupError::HandsExceedDeck {
        needed,
        available: DECK_SIZE,
    };

    let mut deck = Deck::shuffled(rng);
    for _ in 0..config.hand_size {
        for player in players.iter_mut() {
            player.deal(deck.draw().ok_or_else(|| short.clone())?);
        }
    }

    // With every plain card already dealt, any card will do.
    if deck.cards().iter().all(|card| card.is_functional()) {
        let top = deck.draw().ok_or(short)?;
        return Ok((deck, DiscardPile::new(top)));
    }
    let top = loop {
        let card = deck.draw().ok_or_else(|| short.clone())?;
        if !card.is_functional() {
            break card;
        }
        deck.push(card);
        deck.shuffle(rng);
    };
    Ok((deck, DiscardPile::new(top)))
}

fn arrange(
    arrangement: Arrangement,
    players: &mut [Player],
    rng: &mut GameRng,
) -> Result<(Deck, DiscardPile, EffectState, usize), SetupError> {
    let count = players.len();
    if arrangement.hands.len() != count {
        return Err(SetupError::ArrangementMismatch {
            expected: count,
            found: arrangement.hands.len(),
        });
    }
    if arrangement.starting_seat >= count {
        return Err(SetupError::SeatOutOfRange {
            seat: arrangement.starting_seat,
            count,
        });
    }

    let mut named = FxHashSet::default();
    for card in arrangement.named_cards() {
        if !named.insert(card) {
            return Err(SetupError::DuplicateCard(card));
        }
    }

    let mut rest: Vec<Card> = Deck::standard()
        .cards()
        .iter()
        .copied()
        .filter(|card| !named.contains(card))
        .collect();
    rng.shuffle(&mut rest);
    rest.extend(arrangement.deck_top.iter().rev());

    for (player, hand) in players.iter_mut().zip(arrangement.hands) {
        for card in hand {
            player.deal(card);
        }
    }

    Ok((
        Deck::from_cards(rest),
        DiscardPile::with_under(arrangement.discard_under, arrangement.top_card),
        arrangement.effects,
        arrangement.starting_seat,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_deal_gives_each_seat_a_hand() {
        let session = MakaoBuilder::new()
            .players(["A", "B", "C"])
            .seed(42)
            .build()
            .unwrap();

        for player in session.players() {
            assert_eq!(player.hand_size(), 5);
        }
        assert!(!session.top_card().is_functional());
        assert_eq!(session.deck().len(), 52 - 15 - 1);
        assert_eq!(session.cards_in_play(), 52);
    }

    #[test]
    fn test_seat_validation() {
        let err = MakaoBuilder::new().player("Solo").build().unwrap_err();
        assert_eq!(err, SetupError::TooFewPlayers { count: 1, min: 2 });

        let err = MakaoBuilder::new()
            .players((0..9).map(|i| format!("P{i}")))
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::TooManyPlayers { count: 9, max: 8 });

        let err = MakaoBuilder::new()
            .players((0..257).map(|i| format!("P{i}")))
            .config(
                MakaoConfig::default()
                    .with_player_limits(2, 1000)
                    .with_hand_size(0),
            )
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::TooManyPlayers { count: 257, max: 256 });

        let err = MakaoBuilder::new()
            .players(["A", " "])
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::EmptyName { seat: 1 });

        let err = MakaoBuilder::new()
            .players(["A", "B"])
            .human_seat(2)
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::SeatOutOfRange { seat: 2, count: 2 });

        let err = MakaoBuilder::new()
            .players(["A", "B"])
            .human_seat(0)
            .policy(0, GreedyPolicy)
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::PolicyOnInteractiveSeat { seat: 0 });
    }

    #[test]
    fn test_oversized_hands_rejected() {
        let err = MakaoBuilder::new()
            .players(["A", "B", "C", "D", "E", "F", "G", "H"])
            .config(MakaoConfig::default().with_hand_size(7))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::HandsExceedDeck {
                needed: 57,
                available: 52
            }
        );
    }

    #[test]
    fn test_arrangement_is_validated() {
        let five = card(Rank::Five, Suit::Hearts);

        let err = MakaoBuilder::new()
            .players(["A", "B"])
            .arrangement(Arrangement::new(five).hand([card(Rank::Six, Suit::Clubs)]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SetupError::ArrangementMismatch {
                expected: 2,
                found: 1
            }
        );

        let err = MakaoBuilder::new()
            .players(["A", "B"])
            .arrangement(
                Arrangement::new(five)
                    .hand([card(Rank::Six, Suit::Clubs)])
                    .hand([five]),
            )
            .build()
            .unwrap_err();
        assert_eq!(err, SetupError::DuplicateCard(five));
    }

    #[test]
    fn test_arrangement_places_cards() {
        let queen = card(Rank::Queen, Suit::Clubs);
        let king = card(Rank::King, Suit::Diamonds);
        let session = MakaoBuilder::new()
            .players(["A", "B"])
            .seed(3)
            .arrangement(
                Arrangement::new(card(Rank::Five, Suit::Hearts))
                    .hand([card(Rank::Six, Suit::Clubs)])
                    .hand([card(Rank::Seven, Suit::Clubs)])
                    .discard_under([card(Rank::Nine, Suit::Spades)])
                    .deck_top([queen, king])
                    .starting_seat(1),
            )
            .build()
            .unwrap();

        assert_eq!(session.current_seat(), PlayerId::new(1));
        assert_eq!(session.discard().len(), 2);
        let cards = session.deck().cards();
        assert_eq!(cards[cards.len() - 1], queen);
        assert_eq!(cards[cards.len() - 2], king);
        assert_eq!(session.cards_in_play(), 52);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let build = || {
            MakaoBuilder::new()
                .players(["A", "B", "C", "D"])
                .seed(99)
                .build()
                .unwrap()
        };
        let a = build();
        let b = build();
        assert_eq!(a.players(), b.players());
        assert_eq!(a.deck(), b.deck());
        assert_eq!(a.top_card(), b.top_card());
    }
}
