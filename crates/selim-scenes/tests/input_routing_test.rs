//! Input routing between the dialog box, the dock and the scene.

mod common;

use std::time::Duration;

use common::Game;
use selim_core::geometry::{Point, Viewport};
use selim_scenes::domain::commands::Input;
use selim_scenes::domain::events::SceneOutcome;
use selim_scenes::domain::scene::{ITEM_USB, SceneId, SceneObject};

// --- dialog box ---

#[test]
fn test_text_reveals_over_time() {
    // Arrange
    let (mut game, _) = Game::start();
    assert_eq!(game.adventure.presenter().displayed_text(), "");

    // Act
    game.wait(Duration::from_millis(150));

    // Assert
    let full = game.adventure.presenter().full_text().to_owned();
    let shown: String = full.chars().take(3).collect();
    assert_eq!(game.adventure.presenter().displayed_text(), shown);
    assert!(game.adventure.presenter().is_typing());
}

#[test]
fn test_text_finishes_on_its_own() {
    let (mut game, _) = Game::start();

    game.wait(Duration::from_secs(30));

    let presenter = game.adventure.presenter();
    assert!(!presenter.is_typing());
    assert_eq!(presenter.displayed_text(), presenter.full_text());
    assert!(game.timers.len() <= 1);
}

#[test]
fn test_first_advance_interrupts_second_moves_on() {
    // Arrange
    let (mut game, _) = Game::start();
    let first_line = game.adventure.presenter().full_text().to_owned();

    // Act
    game.send(Input::Advance);
    let after_interrupt = game.adventure.presenter().displayed_text().to_owned();
    game.send(Input::Advance);

    // Assert
    assert_eq!(after_interrupt, first_line);
    assert_ne!(game.adventure.presenter().full_text(), first_line);
    assert_eq!(game.adventure.engine().current_index(), Some(1));
}

#[test]
fn test_pointer_down_advances_visible_dialog() {
    let (mut game, _) = Game::start();

    game.send(Input::PointerDown(Point::new(10.0, 10.0)));

    assert!(!game.adventure.presenter().is_typing());
}

#[test]
fn test_advance_is_ignored_without_dialog() {
    // Arrange
    let (mut game, _) = Game::start();
    game.finish_dialog();
    game.finish_dialog();
    assert!(!game.adventure.presenter().is_visible());

    // Act
    let outcomes = game.send(Input::Advance);

    // Assert
    assert!(outcomes.is_empty());
    assert_eq!(game.adventure.scene(), SceneId::Cemetery);
}

// --- dock ---

#[test]
fn test_clicking_dock_slot_selects_item() {
    // Arrange
    let (mut game, _) = Game::start();
    game.finish_dialog();
    game.finish_dialog();
    game.send(Input::Interact(SceneObject::Cupboard));
    let slot = game.adventure.dock().slot_center(0, 1);

    // Act
    let outcomes = game.send(Input::PointerDown(slot));

    // Assert
    assert_eq!(outcomes, vec![SceneOutcome::ItemSelected(ITEM_USB.to_owned())]);
}

#[test]
fn test_resize_moves_dock() {
    // Arrange
    let (mut game, _) = Game::start();
    game.finish_dialog();
    game.finish_dialog();
    game.send(Input::Interact(SceneObject::Cupboard));
    let old_slot = game.adventure.dock().slot_center(0, 1);

    // Act
    game.send(Input::Resize(Viewport::new(1000.0, 800.0)));

    // Assert
    let new_slot = game.adventure.dock().slot_center(0, 1);
    assert!((new_slot.x - 500.0).abs() < 1e-3);
    assert!((new_slot.y - 750.0).abs() < 1e-3);
    assert!(game.send(Input::PointerDown(old_slot)).is_empty());
    assert_eq!(
        game.send(Input::PointerDown(new_slot)),
        vec![SceneOutcome::ItemSelected(ITEM_USB.to_owned())]
    );
}

// --- countdown ---

#[test]
fn test_countdown_times_out_once() {
    // Arrange
    let (mut game, _) = Game::start();
    game.finish_dialog();

    // Act
    let outcomes = game.wait(Duration::from_secs(400));

    // Assert
    let timeouts = outcomes
        .iter()
        .filter(|o| **o == SceneOutcome::UrgencyTimedOut)
        .count();
    assert_eq!(timeouts, 1);
    assert_eq!(game.adventure.gauge().label(), "00:00");
    assert!(!game.adventure.gauge().is_running());
}

#[test]
fn test_intro_has_no_countdown() {
    let (mut game, _) = Game::start();

    let outcomes = game.wait(Duration::from_secs(400));

    assert!(outcomes.is_empty());
    assert_eq!(game.adventure.gauge().label(), "05:00");
}
