//! Card, shoe and hand integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Card, DECK_SIZE, Hand, Rank, Shoe, ShoeError, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit, true)
}

fn identity(card: &Card) -> (Rank, Suit) {
    (card.rank(), card.suit())
}

fn hand_of(cards: &[(Rank, bool)]) -> Hand {
    let mut hand = Hand::new();
    for &(rank, face_up) in cards {
        hand.add(Card::new(rank, Suit::Clubs, face_up));
    }
    hand
}

#[test]
fn game_values_follow_rank() {
    assert_eq!(Rank::Ace.game_value(), 11);
    assert_eq!(Rank::Two.game_value(), 2);
    assert_eq!(Rank::Nine.game_value(), 9);
    assert_eq!(Rank::Ten.game_value(), 10);
    assert_eq!(Rank::Jack.game_value(), 10);
    assert_eq!(Rank::Queen.game_value(), 10);
    assert_eq!(Rank::King.game_value(), 10);
}

#[test]
fn face_down_card_hides_its_name() {
    let mut card = Card::new(Rank::Queen, Suit::Hearts, false);
    assert_eq!(card.display_name(false), "Face down Card");
    assert_eq!(card.display_name(true), "Queen of Hearts");

    card.flip();
    assert!(card.is_face_up());
    assert_eq!(card.display_name(false), "Queen of Hearts");

    card.set_face_up(false);
    assert!(!card.is_face_up());
}

#[test]
fn fresh_shoe_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut shoe = Shoe::shuffled(true, &mut rng);
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_ne!(shoe, Shoe::new(true));

    let drawn = shoe.draw_many(DECK_SIZE).unwrap();
    assert!(shoe.is_empty());
    assert!(drawn.iter().all(Card::is_face_up));

    let seen: HashSet<_> = drawn.iter().map(identity).collect();
    let expected: HashSet<_> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (rank, suit)))
        .collect();
    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(seen, expected);
}

#[test]
fn canonical_order_is_suit_major() {
    let cards = Shoe::new(false).draw_many(DECK_SIZE).unwrap();
    assert_eq!(identity(&cards[0]), (Rank::Ace, Suit::Spades));
    assert_eq!(identity(&cards[12]), (Rank::King, Suit::Spades));
    assert_eq!(identity(&cards[13]), (Rank::Ace, Suit::Diamonds));
    assert_eq!(identity(&cards[51]), (Rank::King, Suit::Hearts));
    assert!(cards.iter().all(|c| !c.is_face_up()));
}

#[test]
fn every_swap_step_moves_the_card() {
    // With two cards each step must swap with the other one, so a full pass
    // always lands back on the starting order.
    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::from_cards(vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
        ]);
        shoe.shuffle(&mut rng);
        assert_eq!(shoe.draw().unwrap().rank(), Rank::Two);
        assert_eq!(shoe.draw().unwrap().rank(), Rank::Three);
    }
}

#[test]
fn shuffle_leaves_short_shoes_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut one = Shoe::from_cards(vec![card(Rank::Seven, Suit::Spades)]);
    one.shuffle(&mut rng);
    assert_eq!(one.draw().unwrap().rank(), Rank::Seven);

    let mut none = Shoe::from_cards(Vec::new());
    none.shuffle(&mut rng);
    assert!(none.is_empty());
}

#[test]
fn draw_takes_from_the_front() {
    let mut shoe = Shoe::from_cards(vec![
        card(Rank::Five, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
    ]);
    assert_eq!(shoe.draw().unwrap().rank(), Rank::Five);
    assert_eq!(shoe.draw().unwrap().rank(), Rank::Nine);
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Empty);
}

#[test]
fn draw_many_fails_whole_when_short() {
    let mut shoe = Shoe::from_cards(vec![card(Rank::Ace, Suit::Spades)]);
    assert_eq!(shoe.draw_many(2).unwrap_err(), ShoeError::Empty);
    assert_eq!(shoe.len(), 1);
}

#[test]
fn hand_without_ace_is_plain_sum() {
    let hand = hand_of(&[(Rank::King, true), (Rank::Six, true), (Rank::Nine, true)]);
    assert_eq!(hand.value(true), 25);
    assert!(!hand.has_ace());
}

#[test]
fn single_ace_over_21_drops_ten() {
    let hand = hand_of(&[(Rank::Ace, true), (Rank::Eight, true), (Rank::Five, true)]);
    assert!(hand.has_ace());
    assert_eq!(hand.value(true), 14);

    let soft = hand_of(&[(Rank::Ace, true), (Rank::King, true)]);
    assert_eq!(soft.value(true), 21);
}

#[test]
fn only_one_reduction_is_applied() {
    let hand = hand_of(&[(Rank::Ace, true), (Rank::Ace, true), (Rank::King, true)]);
    assert_eq!(hand.value(true), 22);
}

#[test]
fn hidden_ace_still_triggers_reduction() {
    let hand = hand_of(&[
        (Rank::Ace, false),
        (Rank::King, true),
        (Rank::Queen, true),
        (Rank::Two, true),
    ]);
    assert_eq!(hand.value(false), 12);
    assert_eq!(hand.value(true), 23);
}

#[test]
fn facing_filters_value_and_names() {
    let mut hand = hand_of(&[(Rank::Seven, false), (Rank::Nine, true)]);
    assert_eq!(hand.value(false), 9);
    assert_eq!(hand.value(true), 16);
    assert_eq!(
        hand.status("Kai", false),
        "Kai's hand: Face down Card, Nine of Clubs (Visible Value: 9)"
    );

    hand.hide_all();
    assert_eq!(hand.value(false), 0);
    assert_eq!(
        hand.status("Kai", false),
        "Kai's hand: Face down Card, Face down Card (Visible Value: Unknown)"
    );
    assert_eq!(
        hand.status("Kai", true),
        "Kai's hand: Seven of Clubs, Nine of Clubs (Visible Value: 16)"
    );
}

#[test]
fn reveal_hole_flips_first_card_once() {
    let mut hand = hand_of(&[(Rank::Ten, false), (Rank::Seven, true)]);
    assert!(hand.reveal_hole());
    assert!(!hand.reveal_hole());
    assert_eq!(hand.value(false), 17);

    hand.hide_all();
    hand.reveal_all();
    assert!(hand.cards().iter().all(Card::is_face_up));
}
