use std::{collections::VecDeque, error, fmt::Display};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    EmptyDeck,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyDeck => write!(
                f,
                "Given deck size is 0, expect at least one card in deck."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub deck_size: usize,
}

pub struct Deck {
    labels: Vec<usize>,
}

impl Deck {
    pub fn try_new(cards_n: usize) -> Result<Self, Error> {
        if cards_n == 0 {
            return Err(Error::EmptyDeck);
        }

        Ok(Deck {
            labels: (0..cards_n).collect(),
        })
    }

    pub fn cards_n(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, pos: usize) -> Option<usize> {
        self.labels.get(pos).copied()
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    // One physical deal-and-tuck round: deal the top card to the table pile,
    // tuck the next one under the in-hand deck, until the hand is empty.
    pub fn deal_round(&mut self) {
        let mut hand = self.labels.drain(..).collect::<VecDeque<_>>();
        let mut table = Vec::with_capacity(hand.len());
        while let Some(dealt) = hand.pop_front() {
            table.push(dealt);
            if hand.len() > 1 {
                let tucked = hand.pop_front().unwrap();
                hand.push_back(tucked);
            }
        }

        // The card dealt last sits on top of the table pile, so the picked-up
        // deck reads the pile in reverse deal order.
        table.reverse();
        self.labels = table;
    }

    pub fn is_in_order(&self) -> bool {
        self.labels.iter().enumerate().all(|(pos, label)| pos == *label)
    }
}

pub struct ShuffleKey {
    key: Vec<usize>,
    copy: Vec<usize>,
}

impl ShuffleKey {
    // Snapshot the deck after its one physical round. Labels started out
    // equal to positions, so the label at position i is exactly the position
    // one round maps into i.
    pub fn from_deck(deck: &Deck) -> Self {
        let key = deck.labels().to_vec();
        let copy = key.clone();

        ShuffleKey { key, copy }
    }

    pub fn labels(&self) -> &[usize] {
        &self.copy
    }

    // One arithmetic round. Entries are read in key order, so the next
    // arrangement is built in a fresh buffer and swapped in whole.
    pub fn adjust(&mut self) {
        let next = self
            .key
            .iter()
            .map(|from_pos| self.copy[*from_pos])
            .collect::<Vec<_>>();
        self.copy = next;
    }
}

pub struct CycleTracker {
    cycle_lens: Vec<u64>,
    unset_n: usize,
}

impl CycleTracker {
    pub fn new(cards_n: usize) -> Self {
        CycleTracker {
            cycle_lens: vec![0; cards_n],
            unset_n: cards_n,
        }
    }

    // Record every card sitting at its original position after the given
    // round. Only the first return counts; later returns happen at multiples
    // of the recorded length and must not overwrite it.
    pub fn record(&mut self, labels: &[usize], rounds: u64) {
        for (pos, label) in labels.iter().enumerate() {
            if *label == pos && self.cycle_lens[pos] == 0 {
                self.cycle_lens[pos] = rounds;
                self.unset_n -= 1;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unset_n == 0
    }

    pub fn cycle_lens(&self) -> &[u64] {
        &self.cycle_lens
    }
}

pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    // Widen for the product, narrow back after dividing out the gcd.
    (u128::from(a) * u128::from(b) / u128::from(gcd(a, b))) as u64
}

pub fn lcm_all(lens: impl IntoIterator<Item = u64>) -> u64 {
    lens.into_iter().fold(1, lcm)
}

pub fn rounds_to_restore(cards_n: usize) -> Result<u64, Error> {
    let mut deck = Deck::try_new(cards_n)?;
    deck.deal_round();
    let mut key = ShuffleKey::from_deck(&deck);
    let mut tracker = CycleTracker::new(deck.cards_n());
    let mut rounds = 1;
    tracker.record(key.labels(), rounds);
    while !tracker.is_complete() {
        key.adjust();
        rounds += 1;
        tracker.record(key.labels(), rounds);
    }

    Ok(lcm_all(tracker.cycle_lens().iter().copied()))
}
