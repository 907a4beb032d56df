/// Declares the closed set of bundled games.
///
/// Generates the `Session` enum (one variant per game), its `Game`
/// implementation dispatching by `match`, and `create_default_registry()`
/// registering each game's constructor under its display name.
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     TicTacToe => {
///         game: tictactoe::TicTacToeGame,
///         name: "Tic-Tac-Toe",
///         description: "Three in a row against a random AI"
///     },
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    (
        $(
            $variant:ident => {
                game: $game:ty,
                name: $name:expr,
                description: $desc:expr
            }
        ),* $(,)?
    ) => {
        /// One running game. The shell owns at most one at a time.
        pub enum Session {
            $( $variant($game), )*
        }

        impl $crate::core::game::Game for Session {
            fn name(&self) -> &'static str {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::name(g), )*
                }
            }

            fn init(&mut self) {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::init(g), )*
                }
            }

            fn handle_input(&mut self, key: ::crossterm::event::KeyEvent) {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::handle_input(g, key), )*
                }
            }

            fn update(&mut self, dt: f32, ctx: &$crate::core::game::Context) {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::update(g, dt, ctx), )*
                }
            }

            fn render(&self, frame: &mut ::ratatui::Frame, area: ::ratatui::layout::Rect) {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::render(g, frame, area), )*
                }
            }

            fn is_over(&self) -> bool {
                match self {
                    $( Session::$variant(g) => $crate::core::game::Game::is_over(g), )*
                }
            }
        }

        /// Registry with every bundled game, in declaration order.
        pub fn create_default_registry() -> $crate::core::registry::GameRegistry {
            let mut registry = $crate::core::registry::GameRegistry::new();
            $(
                registry.register(
                    $crate::core::registry::GameInfo {
                        name: $name,
                        description: $desc,
                    },
                    |options: &$crate::core::registry::SessionOptions| {
                        use $crate::core::game::Game;
                        let mut game = <$game>::new(options);
                        game.init();
                        Session::$variant(game)
                    },
                );
            )*
            registry
        }
    };
}
