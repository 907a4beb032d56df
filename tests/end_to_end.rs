use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

use puzzle_studio::config::AppConfig;
use puzzle_studio::games::create_default_registry;
use puzzle_studio::games::tictactoe::{Player, WinLine};
use puzzle_studio::scores::ScoreLog;
use puzzle_studio::ui::{Screen, Shell};
use puzzle_studio::{Game, Session};

fn press(shell: &mut Shell, code: KeyCode) {
    shell.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(shell: &mut Shell, text: &str) {
    for c in text.chars() {
        press(shell, KeyCode::Char(c));
    }
}

fn screen_text(shell: &Shell) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| shell.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn two_player_shell(dir: &TempDir) -> Shell {
    let mut config = AppConfig::default();
    config.session.vs_ai = false;
    config.session.grace_period_secs = 2.0;
    config.scores.path = dir.path().join("scores.txt");
    let scores = ScoreLog::open(&config.scores.path);
    Shell::new(&config, create_default_registry(), scores, Some(1)).unwrap()
}

#[test]
fn tic_tac_toe_row_win_is_recorded_for_named_player() {
    let dir = TempDir::new().unwrap();
    let mut shell = two_player_shell(&dir);
    assert!(screen_text(&shell).contains("Press any key to continue"));

    press(&mut shell, KeyCode::Enter);
    assert!(screen_text(&shell).contains("Tic-Tac-Toe"));
    press(&mut shell, KeyCode::Enter);
    type_text(&mut shell, "ada");
    assert!(screen_text(&shell).contains("Name: ada"));
    press(&mut shell, KeyCode::Enter);
    assert_eq!(shell.player(), "ada");

    // X: 1 2 3 (row 0), O: 4 5.
    for digit in ['1', '4', '2', '5', '3'] {
        press(&mut shell, KeyCode::Char(digit));
    }

    shell.update(0.016);
    let Screen::Game(game) = shell.screen() else {
        panic!("expected the game screen during the grace window");
    };
    let Session::TicTacToe(ttt) = game.session() else {
        panic!("expected a tic-tac-toe session");
    };
    assert_eq!(ttt.rules().winner(), Some(Player::X));
    assert_eq!(
        ttt.rules().winning_line(),
        Some(WinLine {
            start: (0, 0),
            end: (0, 2)
        })
    );
    assert!(!game.session().is_over());
    assert!(screen_text(&shell).contains("Winner: X!"));

    let entries = shell.scores().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].game, "Tic-Tac-Toe");
    assert_eq!(entries[0].player, "ada");
    assert_eq!(entries[0].result, "Winner: X");

    // Further frames never re-report; the grace window returns to the menu.
    shell.update(1.0);
    shell.update(1.5);
    assert!(matches!(shell.screen(), Screen::MainMenu(_)));
    assert_eq!(shell.scores().total_games(), 1);
    assert!(screen_text(&shell).contains("1 games played"));

    // The scoreboard shows the new champion.
    for _ in 0..3 {
        press(&mut shell, KeyCode::Down);
    }
    press(&mut shell, KeyCode::Enter);
    let text = screen_text(&shell);
    assert!(text.contains("ada conquered Tic-Tac-Toe"));
    assert!(text.contains("Winner: X"));
}

#[test]
fn blank_name_plays_as_default_player() {
    let dir = TempDir::new().unwrap();
    let mut shell = two_player_shell(&dir);
    press(&mut shell, KeyCode::Enter);
    press(&mut shell, KeyCode::Enter);
    press(&mut shell, KeyCode::Enter);
    assert_eq!(shell.player(), "Player");
    assert!(screen_text(&shell).contains("Player: Player"));
}

#[test]
fn every_screen_renders() {
    let dir = TempDir::new().unwrap();
    let mut shell = two_player_shell(&dir);
    press(&mut shell, KeyCode::Enter);

    // 2048 session.
    press(&mut shell, KeyCode::Down);
    press(&mut shell, KeyCode::Down);
    press(&mut shell, KeyCode::Enter);
    press(&mut shell, KeyCode::Enter);
    shell.update(65.0);
    let text = screen_text(&shell);
    assert!(text.contains("Score: 0"));
    assert!(text.contains("01:05"));
    press(&mut shell, KeyCode::Esc);

    // Settings.
    for _ in 0..4 {
        press(&mut shell, KeyCode::Down);
    }
    press(&mut shell, KeyCode::Enter);
    assert!(screen_text(&shell).contains("SETTINGS"));
    press(&mut shell, KeyCode::Esc);

    // Empty scoreboard.
    for _ in 0..3 {
        press(&mut shell, KeyCode::Down);
    }
    press(&mut shell, KeyCode::Enter);
    assert!(screen_text(&shell).contains("No champions recorded yet. Play a game!"));
}

#[test]
fn win_followed_by_escape_before_next_frame_is_recorded() {
    let dir = TempDir::new().unwrap();
    let mut shell = two_player_shell(&dir);
    press(&mut shell, KeyCode::Enter);
    press(&mut shell, KeyCode::Enter);
    type_text(&mut shell, "bo");
    press(&mut shell, KeyCode::Enter);

    for digit in ['1', '4', '2', '5', '3'] {
        press(&mut shell, KeyCode::Char(digit));
    }
    press(&mut shell, KeyCode::Esc);
    assert!(matches!(shell.screen(), Screen::MainMenu(_)));

    shell.update(0.016);
    let entries = shell.scores().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].player, "bo");
    assert_eq!(entries[0].result, "Winner: X");
}
