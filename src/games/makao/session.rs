//! The turn engine.
//!
//! A [`Session`] owns everything about one game: deck, discard pile,
//! players, the [`EffectState`], the RNG and the turn history. It walks
//! each seat through the [`TurnPhase`] machine:
//!
//! - **Automated seats** are advanced one turn per
//!   [`Session::advance_automated_turn`] call. Their policy is consulted,
//!   its decision is validated and then executed.
//! - **The interactive seat** is brought to `AwaitingMove` as soon as play
//!   reaches it, and stays there until a `submit_*` call closes the turn.
//!
//! ## Move windows
//!
//! While the interactive seat holds the turn, a window tracks what a draw
//! has already done this turn:
//!
//! | Window | Legal plays | Draw | Pass |
//! |--------|-------------|------|------|
//! | open | per the condition | draw one / probe / penalty | only to sit out a skip |
//! | drawn card | that card | rejected | ends the turn |
//! | probed counter | that card | takes the penalty | sits out a skip |
//!
//! Rejected submissions leave the session untouched.

use im::Vector;
use log::{debug, info, trace, warn};

use super::builder::MakaoBuilder;
use super::outcome::{DrawResult, MoveResult, RejectionReason, SetupError, TurnSummary};
use crate::cards::{Card, Deck, DiscardPile};
use crate::core::{
    ExhaustionPolicy, GameRng, GameRngState, MakaoConfig, Player, PlayerId, PlayerView,
    RequiredAction, TableState, TurnDirection, TurnOutcome, TurnPhase, TurnRecord,
};
use crate::policy::{Decision, DecisionPolicy, TurnContext};
use crate::rules::{
    self, apply_effects_of_play, default_declaration, meet_demand, Condition, Declaration,
    EffectKind, EffectState, TriggeredEffects,
};

/// Who makes the decisions for a seat.
#[derive(Debug)]
pub(crate) enum Seat {
    Interactive,
    Automated(Box<dyn DecisionPolicy>),
}

/// What a draw has already done during the interactive seat's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Window {
    Open,
    /// Drew a card that may be played.
    Drawn(Card),
    /// Drew the deck's next card as a counter to an obligation.
    Probed(Card),
}

/// Per-turn bookkeeping, reset when a turn starts.
#[derive(Debug, Default)]
struct TurnScratch {
    drawn: Vec<Card>,
    played: Vec<Card>,
    effects: TriggeredEffects,
    recycles_at_start: u32,
}

/// Table layout handed over by the builder.
pub(crate) struct Table {
    pub config: MakaoConfig,
    pub rng: GameRng,
    pub deck: Deck,
    pub discard: DiscardPile,
    pub players: Vec<Player>,
    pub seats: Vec<Seat>,
    pub effects: EffectState,
    pub starting_seat: usize,
    pub direction: TurnDirection,
}

/// One game of Makao.
#[derive(Debug)]
pub struct Session {
    config: MakaoConfig,
    rng: GameRng,
    deck: Deck,
    discard: DiscardPile,
    players: Vec<Player>,
    seats: Vec<Seat>,
    current: usize,
    direction: TurnDirection,
    effects: EffectState,
    phase: TurnPhase,
    window: Window,
    scratch: TurnScratch,
    turn_number: u32,
    decks_in_play: u32,
    recycles: u32,
    history: Vector<TurnRecord>,
}

impl Session {
    /// Deal a fresh game with default rules.
    ///
    /// Every seat except `human_seat` is driven by the default policy.
    pub fn new_game<I, S>(names: I, human_seat: usize) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MakaoBuilder::new()
            .players(names)
            .human_seat(human_seat)
            .build()
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> MakaoBuilder {
        MakaoBuilder::new()
    }

    pub(crate) fn from_table(table: Table) -> Self {
        let mut session = Self {
            config: table.config,
            rng: table.rng,
            deck: table.deck,
            discard: table.discard,
            players: table.players,
            seats: table.seats,
            current: table.starting_seat,
            direction: table.direction,
            effects: table.effects,
            phase: TurnPhase::AwaitingTurnStart,
            window: Window::Open,
            scratch: TurnScratch::default(),
            turn_number: 1,
            decks_in_play: 1,
            recycles: 0,
            history: Vector::new(),
        };
        info!(
            "new game: {} players, seed {}, {} starts on {}",
            session.players.len(),
            session.rng.seed(),
            session.players[session.current].name(),
            session.discard.top()
        );
        session.enter_seat();
        session
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MakaoConfig {
        &self.config
    }

    /// Seed the session's RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Snapshot of the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Seat holding the turn (the winner once the game is over).
    #[must_use]
    pub fn current_seat(&self) -> PlayerId {
        self.players[self.current].id()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn top_card(&self) -> Card {
        self.discard.top()
    }

    #[must_use]
    pub fn effects(&self) -> &EffectState {
        &self.effects
    }

    /// The condition governing the next play.
    #[must_use]
    pub fn condition(&self) -> Condition {
        rules::condition(self.discard.top(), &self.effects)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::Terminal { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    /// Number of the turn in progress, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Full 52-card decks brought into play, including the first.
    #[must_use]
    pub fn decks_in_play(&self) -> u32 {
        self.decks_in_play
    }

    /// Cards in the deck, the discard pile and all hands.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cards the seat holding the turn may play right now.
    ///
    /// Empty outside `AwaitingMove`. After a draw only the drawn card is
    /// offered.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Card> {
        if self.phase != TurnPhase::AwaitingMove {
            return Vec::new();
        }
        match self.window {
            Window::Open => rules::legal_moves(
                self.players[self.current].hand(),
                self.discard.top(),
                &self.effects,
            ),
            Window::Drawn(card) | Window::Probed(card) => vec![card],
        }
    }

    /// What the interactive seat must do, if it holds the turn.
    #[must_use]
    pub fn required_action(&self) -> Option<RequiredAction> {
        if self.phase != TurnPhase::AwaitingMove || !self.seat_is_interactive() {
            return None;
        }
        let pending = self.effects.pending_draw_count;
        Some(match (self.window, self.condition()) {
            (Window::Open, Condition::DrawChain { .. }) => {
                RequiredAction::CounterOrTakePenalty { pending }
            }
            (Window::Open, Condition::Skip) => RequiredAction::PlayFourOrSitOut,
            (Window::Open, _) => RequiredAction::PlayOrDraw,
            (Window::Drawn(card), _) => RequiredAction::PlayDrawnOrPass { card },
            (Window::Probed(card), Condition::DrawChain { .. }) => {
                RequiredAction::PlayProbedOrTakePenalty { card, pending }
            }
            (Window::Probed(card), _) => RequiredAction::PlayProbedOrSitOut { card },
        })
    }

    /// Snapshot for presentation.
    #[must_use]
    pub fn current_state(&self) -> TableState {
        TableState {
            top_card: self.discard.top(),
            effects: self.effects.clone(),
            current_seat: self.current_seat(),
            phase: self.phase,
            required_action: self.required_action(),
            turn_number: self.turn_number,
            deck_size: self.deck.len(),
            discard_size: self.discard.len(),
            players: self.players.iter().map(PlayerView::from).collect(),
            winner: self.winner(),
        }
    }

    // === Interactive seat ===

    /// Play `card` with the declaration the rules would make.
    pub fn submit_play(&mut self, card: Card) -> MoveResult {
        let remaining = self.players[self.current].hand_without(card);
        self.submit_play_declaring(card, default_declaration(card, &remaining))
    }

    /// Play `card` with an explicit Jack demand or Ace suit.
    ///
    /// An Ace without a suit locks the default suit. A Jack without a demand
    /// demands nothing.
    pub fn submit_play_declaring(&mut self, card: Card, declaration: Declaration) -> MoveResult {
        let declaration = match self.check_play(card, declaration) {
            Ok(declaration) => declaration,
            Err(reason) => {
                debug!("rejected play of {card}: {reason}");
                return MoveResult::rejected(reason);
            }
        };
        self.play_card(card, declaration);
        MoveResult::accepted(self.conclude(TurnOutcome::Played(card)))
    }

    /// Draw for the interactive seat.
    ///
    /// Depending on the condition this draws one card, probes the next card
    /// as a counter, or discharges the obligation.
    pub fn submit_draw(&mut self) -> Result<DrawResult, RejectionReason> {
        self.awaiting_interactive()?;
        let recycles_before = self.scratch.recycles_at_start;
        let governing = self.condition();
        let holds_counter = self.window == Window::Open && !self.legal_moves().is_empty();

        let (cards_drawn, turn_ended) = match (self.window, governing) {
            (Window::Open, Condition::DrawChain { .. } | Condition::Skip)
                if !holds_counter && self.next_card_counters() =>
            {
                let drawn = self.draw_cards(1);
                if let Some(&card) = drawn.first() {
                    debug!("{} probes {card}", self.players[self.current].name());
                    self.window = Window::Probed(card);
                }
                (drawn, false)
            }
            (Window::Open | Window::Probed(_), Condition::DrawChain { .. }) => {
                let (owed, drawn) = self.take_penalty();
                self.conclude(TurnOutcome::TookPenalty(owed));
                (drawn, true)
            }
            (Window::Open, Condition::Skip) => {
                if holds_counter {
                    return Err(RejectionReason::ActionNotPermittedInCurrentPhase);
                }
                self.sit_out();
                self.conclude(TurnOutcome::SatOut);
                (Vec::new(), true)
            }
            (Window::Open, _) => {
                let drawn = self.draw_cards(1);
                match drawn.first().copied() {
                    Some(card) if governing.admits(card) => {
                        self.window = Window::Drawn(card);
                        (drawn, false)
                    }
                    _ => {
                        self.conclude(TurnOutcome::Passed);
                        (drawn, true)
                    }
                }
            }
            _ => return Err(RejectionReason::ActionNotPermittedInCurrentPhase),
        };

        Ok(DrawResult {
            cards_drawn,
            deck_was_recycled: self.recycles > recycles_before,
            turn_ended,
        })
    }

    /// Decline to play: keep a drawn card, or sit out a skip.
    pub fn submit_pass(&mut self) -> Result<(), RejectionReason> {
        self.awaiting_interactive()?;
        match (self.window, self.condition()) {
            (Window::Drawn(_), _) => {
                self.conclude(TurnOutcome::Passed);
            }
            (Window::Open | Window::Probed(_), Condition::Skip) => {
                self.sit_out();
                self.conclude(TurnOutcome::SatOut);
            }
            _ => return Err(RejectionReason::ActionNotPermittedInCurrentPhase),
        }
        Ok(())
    }

    // === Automated seats ===

    /// Run one full turn for the automated seat holding the turn.
    pub fn advance_automated_turn(&mut self) -> Result<TurnSummary, RejectionReason> {
        if self.phase != TurnPhase::AwaitingTurnStart || self.seat_is_interactive() {
            return Err(RejectionReason::ActionNotPermittedInCurrentPhase);
        }
        if !self.start_turn() {
            return Ok(self.conclude(TurnOutcome::Waited));
        }
        let decision = self.automated_decision();
        let outcome = self.execute(decision);
        Ok(self.conclude(outcome))
    }

    /// Advance automated turns until someone wins, the interactive seat is
    /// reached, or `max_turns` turns have run.
    pub fn run_to_completion(&mut self, max_turns: usize) -> Option<PlayerId> {
        for _ in 0..max_turns {
            if self.advance_automated_turn().is_err() {
                break;
            }
        }
        self.winner()
    }

    fn automated_decision(&self) -> Decision {
        let player = &self.players[self.current];
        let top = self.discard.top();
        let governing = self.condition();
        let legal = rules::legal_moves(player.hand(), top, &self.effects);
        let ctx = TurnContext {
            hand: player.hand(),
            top,
            effects: &self.effects,
            condition: governing,
            legal: &legal,
            next_card: self.deck.peek(),
        };
        let decision = match &self.seats[self.current] {
            Seat::Automated(policy) => policy.decide(&ctx),
            Seat::Interactive => forced_decision(governing),
        };
        if decision_is_valid(decision, &ctx) {
            decision
        } else {
            warn!(
                "{} chose {decision:?}, which {governing:?} does not allow",
                player.name()
            );
            forced_decision(governing)
        }
    }

    fn execute(&mut self, decision: Decision) -> TurnOutcome {
        match decision {
            Decision::Play(card) => {
                self.play_automated(card);
                TurnOutcome::Played(card)
            }
            Decision::PlayRank(card) => {
                self.play_automated(card);
                let mates: Vec<Card> = self.players[self.current]
                    .hand()
                    .iter()
                    .copied()
                    .filter(|other| other.rank == card.rank)
                    .collect();
                for mate in mates {
                    if !rules::legal_moves(&[mate], self.discard.top(), &self.effects).is_empty() {
                        self.play_automated(mate);
                    }
                }
                TurnOutcome::Played(card)
            }
            Decision::ProbeCounter => {
                let governing = self.condition();
                match self.draw_cards(1).first().copied() {
                    Some(card) if governing.admits(card) => {
                        self.play_automated(card);
                        TurnOutcome::Played(card)
                    }
                    _ => self.discharge_obligation(),
                }
            }
            Decision::DrawOne => {
                let top = self.discard.top();
                let governing = self.condition();
                match self.draw_cards(1).first().copied() {
                    Some(card)
                        if (card.rank == top.rank || card.suit == top.suit)
                            && governing.admits(card) =>
                    {
                        self.play_automated(card);
                        TurnOutcome::Played(card)
                    }
                    _ => TurnOutcome::Passed,
                }
            }
            Decision::TakePenalty | Decision::SitOut => self.discharge_obligation(),
        }
    }

    fn play_automated(&mut self, card: Card) {
        let remaining = self.players[self.current].hand_without(card);
        let declaration = match &self.seats[self.current] {
            Seat::Automated(policy) => policy.declare(card, &remaining),
            Seat::Interactive => default_declaration(card, &remaining),
        };
        let declaration = if declaration.is_valid_for(card) {
            declaration
        } else {
            warn!("invalid declaration {declaration:?} for {card}; using the default");
            default_declaration(card, &remaining)
        };
        self.play_card(card, declaration);
    }

    // === Turn machinery ===

    fn seat_is_interactive(&self) -> bool {
        matches!(self.seats[self.current], Seat::Interactive)
    }

    fn awaiting_interactive(&self) -> Result<(), RejectionReason> {
        if self.phase == TurnPhase::AwaitingMove && self.seat_is_interactive() {
            Ok(())
        } else {
            Err(RejectionReason::ActionNotPermittedInCurrentPhase)
        }
    }

    fn next_card_counters(&self) -> bool {
        self.deck
            .peek()
            .is_some_and(|card| self.condition().admits(card))
    }

    fn check_play(
        &self,
        card: Card,
        declaration: Declaration,
    ) -> Result<Declaration, RejectionReason> {
        self.awaiting_interactive()?;
        let player = &self.players[self.current];
        if !player.holds(card) {
            return Err(RejectionReason::CardNotInHand);
        }
        if !self.legal_moves().contains(&card) {
            return Err(RejectionReason::CardNotLegalUnderActiveEffect);
        }
        if !declaration.is_valid_for(card) {
            return Err(RejectionReason::InvalidDeclaration);
        }
        let mut declaration = declaration;
        if declaration.suit.is_none() {
            declaration.suit = default_declaration(card, &player.hand_without(card)).suit;
        }
        Ok(declaration)
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        trace!(
            "{}: {:?} -> {:?}",
            self.players[self.current].id(),
            self.phase,
            phase
        );
        self.phase = phase;
    }

    /// Start the current seat's turn. Returns false if the seat loses it to
    /// an earlier skip.
    fn start_turn(&mut self) -> bool {
        self.scratch = TurnScratch {
            recycles_at_start: self.recycles,
            ..TurnScratch::default()
        };
        if self.deck.len() <= self.effects.pending_draw_count as usize + 1 {
            self.recycle();
        }

        self.set_phase(TurnPhase::EvaluatingEffects);
        let bound = self.config.demand_bound_for(self.players.len());
        if let Some(rank) = self.effects.tick_demand(bound) {
            debug!("demand for {rank} expired");
            self.scratch.effects.push(EffectKind::DemandExpired(rank));
        }

        let player = &mut self.players[self.current];
        player.begin_turn();
        if player.consume_waiting_turn() {
            debug!("{} waits out this turn", player.name());
            return false;
        }
        self.window = Window::Open;
        self.set_phase(TurnPhase::AwaitingMove);
        true
    }

    /// Bring an interactive seat up to its move window, resolving any turns
    /// it loses to a skip on the way.
    fn enter_seat(&mut self) {
        while self.phase == TurnPhase::AwaitingTurnStart && self.seat_is_interactive() {
            if self.start_turn() {
                break;
            }
            self.finish_turn(TurnOutcome::Waited);
        }
    }

    fn conclude(&mut self, outcome: TurnOutcome) -> TurnSummary {
        let summary = self.finish_turn(outcome);
        self.enter_seat();
        summary
    }

    fn finish_turn(&mut self, outcome: TurnOutcome) -> TurnSummary {
        self.set_phase(TurnPhase::CheckingWinCondition);
        let player = self.players[self.current].id();
        let scratch = std::mem::take(&mut self.scratch);
        debug!(
            "turn {}: {} {:?} (drew {})",
            self.turn_number,
            self.players[self.current].name(),
            outcome,
            scratch.drawn.len()
        );
        self.history.push_back(
            TurnRecord::new(player, self.turn_number, scratch.drawn.clone(), outcome)
                .with_played(scratch.played.clone()),
        );

        let hand_size = self.players[self.current].hand_size();
        let makao = outcome.played().is_some() && hand_size == 1;
        if makao {
            info!("{} calls Makao", self.players[self.current].name());
        }

        let winner = self.players[self.current]
            .hand()
            .is_empty()
            .then_some(player);
        match winner {
            Some(winner) => {
                info!(
                    "{} wins on turn {}",
                    self.players[self.current].name(),
                    self.turn_number
                );
                self.set_phase(TurnPhase::Terminal { winner });
            }
            None => {
                self.set_phase(TurnPhase::AdvancingSeat);
                self.current = self.direction.next_seat(self.current, self.players.len());
                self.turn_number += 1;
                self.window = Window::Open;
                self.set_phase(TurnPhase::AwaitingTurnStart);
            }
        }

        TurnSummary {
            player,
            drawn: scratch.drawn,
            played: scratch.played,
            outcome,
            effects_triggered: scratch.effects,
            deck_was_recycled: self.recycles > scratch.recycles_at_start,
            makao,
            game_over: winner.is_some(),
            winner,
        }
    }

    fn play_card(&mut self, card: Card, declaration: Declaration) {
        self.set_phase(TurnPhase::ApplyingMove);
        let player = &mut self.players[self.current];
        player.remove(card);
        player.record_play(card);
        debug!("{} plays {card}", player.name());
        self.discard.push(card);
        self.scratch.played.push(card);

        if self.config.demand_ends_when_met {
            if let Some(rank) = meet_demand(&mut self.effects, card) {
                self.scratch.effects.push(EffectKind::DemandMet(rank));
            }
        }
        let triggered = apply_effects_of_play(&mut self.effects, card, declaration);
        self.scratch.effects.extend(triggered);
    }

    /// Take the penalty or sit out, whichever the condition calls for.
    fn discharge_obligation(&mut self) -> TurnOutcome {
        match self.condition() {
            Condition::DrawChain { .. } => TurnOutcome::TookPenalty(self.take_penalty().0),
            Condition::Skip => {
                self.sit_out();
                TurnOutcome::SatOut
            }
            _ => TurnOutcome::Passed,
        }
    }

    /// Draw the whole chain. Returns the cards owed and those drawn.
    fn take_penalty(&mut self) -> (u32, Vec<Card>) {
        self.set_phase(TurnPhase::ApplyingMove);
        let owed = self.effects.take_penalty();
        let drawn = self.draw_cards(owed);
        debug!(
            "{} takes a penalty of {owed}",
            self.players[self.current].name()
        );
        (owed, drawn)
    }

    fn sit_out(&mut self) {
        self.set_phase(TurnPhase::ApplyingMove);
        self.effects.discharge_skip();
        let extra = self.config.skip_turns.saturating_sub(1);
        let player = &mut self.players[self.current];
        player.sit_out(extra);
        debug!("{} sits out", player.name());
    }

    fn draw_cards(&mut self, count: u32) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let Some(card) = self.draw_one() else {
                break;
            };
            self.players[self.current].receive(card);
            drawn.push(card);
        }
        self.scratch.drawn.extend_from_slice(&drawn);
        drawn
    }

    fn draw_one(&mut self) -> Option<Card> {
        if self.deck.is_empty() && !self.recycle() {
            match self.config.exhaustion {
                ExhaustionPolicy::FreshDeck => {
                    warn!("deck and discard pile are exhausted; opening a fresh deck");
                    self.deck = Deck::shuffled(&mut self.rng);
                    self.decks_in_play += 1;
                }
                ExhaustionPolicy::StopDrawing => {
                    warn!("deck and discard pile are exhausted; the draw stops short");
                    return None;
                }
            }
        }
        self.deck.draw()
    }

    /// Shuffle the discard pile (below its top) back into the deck.
    fn recycle(&mut self) -> bool {
        let moved = self.deck.recycle_from(&mut self.discard, &mut self.rng);
        if moved == 0 {
            return false;
        }
        self.recycles += 1;
        debug!("recycled {moved} cards into the deck");
        true
    }
}

/// Is `decision` something the engine can carry out in this context?
fn decision_is_valid(decision: Decision, ctx: &TurnContext<'_>) -> bool {
    match decision {
        Decision::Play(card) | Decision::PlayRank(card) => ctx.legal.contains(&card),
        Decision::ProbeCounter => ctx.condition.is_obligation() && ctx.next_card_counters(),
        Decision::TakePenalty => matches!(ctx.condition, Condition::DrawChain { .. }),
        Decision::SitOut => ctx.condition == Condition::Skip,
        Decision::DrawOne => !ctx.condition.is_obligation(),
    }
}

/// The move a seat is held to when it cannot or will not choose one.
fn forced_decision(condition: Condition) -> Decision {
    match condition {
        Condition::DrawChain { .. } => Decision::TakePenalty,
        Condition::Skip => Decision::SitOut,
        _ => Decision::DrawOne,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn ctx<'a>(
        hand: &'a [Card],
        legal: &'a [Card],
        effects: &'a EffectState,
        condition: Condition,
        next_card: Option<Card>,
    ) -> TurnContext<'a> {
        TurnContext {
            hand,
            top: card(Rank::Five, Suit::Hearts),
            effects,
            condition,
            legal,
            next_card,
        }
    }

    #[test]
    fn test_forced_decisions() {
        let top = card(Rank::Two, Suit::Hearts);
        assert_eq!(
            forced_decision(Condition::DrawChain { top }),
            Decision::TakePenalty
        );
        assert_eq!(forced_decision(Condition::Skip), Decision::SitOut);
        assert_eq!(forced_decision(Condition::QueenWild), Decision::DrawOne);
    }

    #[test]
    fn test_decision_validation() {
        let effects = EffectState::new();
        let hand = [card(Rank::Five, Suit::Clubs)];
        let legal = [card(Rank::Five, Suit::Clubs)];
        let top = card(Rank::Five, Suit::Hearts);

        let open = ctx(&hand, &legal, &effects, Condition::Match { top }, None);
        assert!(decision_is_valid(Decision::Play(hand[0]), &open));
        assert!(decision_is_valid(Decision::PlayRank(hand[0]), &open));
        assert!(decision_is_valid(Decision::DrawOne, &open));
        assert!(!decision_is_valid(Decision::TakePenalty, &open));
        assert!(!decision_is_valid(
            Decision::Play(card(Rank::Nine, Suit::Spades)),
            &open
        ));

        let chain = Condition::DrawChain {
            top: card(Rank::Two, Suit::Hearts),
        };
        let probe = ctx(&hand, &[], &effects, chain, Some(card(Rank::Two, Suit::Clubs)));
        assert!(decision_is_valid(Decision::ProbeCounter, &probe));
        assert!(decision_is_valid(Decision::TakePenalty, &probe));
        assert!(!decision_is_valid(Decision::DrawOne, &probe));
        assert!(!decision_is_valid(Decision::SitOut, &probe));

        let dud = ctx(&hand, &[], &effects, chain, Some(card(Rank::Nine, Suit::Clubs)));
        assert!(!decision_is_valid(Decision::ProbeCounter, &dud));
    }

    #[test]
    fn test_session_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Session>();
    }
}
