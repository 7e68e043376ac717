use shoe_engine::cards::{Card, Rank as R, Suit as S};
use shoe_engine::hand::{evaluate_hand, is_blackjack, is_bust, HandValue};
use shoe_engine::player::{Hand, HandState};

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut h = Hand::new();
    for &card in cards {
        h.hit(card).unwrap();
    }
    h
}

#[test]
fn ace_king_is_blackjack() {
    let cards = [c(S::Spades, R::Ace), c(S::Hearts, R::King)];
    assert_eq!(evaluate_hand(&cards), HandValue { total: 21, soft: true });
    assert!(is_blackjack(&cards));
    let h = hand_of(&cards);
    assert_eq!(h.state(), HandState::Blackjack);
    assert!(h.is_blackjack());
}

#[test]
fn two_aces_and_nine_is_twenty_one_but_not_blackjack() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Nine),
    ];
    let v = evaluate_hand(&cards);
    assert_eq!(v.total, 21);
    assert!(v.soft, "one ace still counts as 11");
    assert!(!is_blackjack(&cards));
    let h = hand_of(&cards);
    assert_eq!(h.state(), HandState::Active);
    assert!(!h.is_blackjack());
}

#[test]
fn king_queen_five_busts() {
    let cards = [
        c(S::Spades, R::King),
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::Five),
    ];
    assert_eq!(evaluate_hand(&cards).total, 25);
    assert!(is_bust(&cards));
    let h = hand_of(&cards);
    assert_eq!(h.state(), HandState::Busted);
    assert!(h.is_bust());
}

#[test]
fn four_aces_score_fourteen_soft() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
    ];
    assert_eq!(evaluate_hand(&cards), HandValue { total: 14, soft: true });
}

#[test]
fn hard_total_when_every_ace_is_demoted() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::King),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&cards), HandValue { total: 21, soft: false });
}

#[test]
fn number_cards_score_face_value() {
    let cards = [
        c(S::Spades, R::Two),
        c(S::Spades, R::Three),
        c(S::Spades, R::Four),
        c(S::Spades, R::Five),
    ];
    assert_eq!(evaluate_hand(&cards), HandValue { total: 14, soft: false });
}

#[test]
fn ten_and_face_make_twenty_not_blackjack() {
    let h = hand_of(&[c(S::Spades, R::Ten), c(S::Hearts, R::Jack)]);
    assert_eq!(h.value().total, 20);
    assert_eq!(h.state(), HandState::Active);
}
