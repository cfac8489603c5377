#[macro_use]
extern crate criterion;

use criterion::Criterion;
use grenzo::data::ALL_CARDS;
use grenzo::deck::Deck;
use grenzo::game::Game;
use grenzo::mulligan::MinLands;
use grenzo::pull::PullPolicy;
use grenzo::simulation::{simulate_game, Strategy};

fn criterion_function(c: &mut Criterion) {
  let code = include_str!("../src/decks/grenzo");
  let deck = Deck::from_list(&ALL_CARDS, code).expect("Bad deckcode");
  let policy = PullPolicy::grenzo();
  let mulligan = MinLands::default();
  let strategy = Strategy::default();
  let mut seed = 0;
  c.bench_function("grenzo simulate_game", move |b| {
    b.iter(|| {
      seed += 1;
      let mut game = Game::from_seed(deck.flatten(), &policy, seed);
      simulate_game(&mut game, &mulligan, &strategy).expect("no opening hand")
    })
  });
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
