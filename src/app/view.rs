// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo lobby.
//!
//! The lobby is a stand-in page: a header with the player's balance, a row
//! of buttons that exercise the overlays, and a scrollable grid of game
//! tiles behind a [`ScrollGate`](crate::ui::widgets::ScrollGate).

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::modal::{ElementId, FocusHost, FocusTree, Focusability};
use crate::ui::notifications::Category;
use crate::ui::styles;
use crate::ui::widgets::scroll_gate;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Focus tree IDs used by the lobby and the cash-out dialog.
pub mod ids {
    use crate::ui::modal::ElementId;

    pub const LOBBY: ElementId = ElementId::new("lobby");
    pub const OPEN_CASH_OUT: ElementId = ElementId::new("lobby/cash-out");
    pub const CLEAR_TOASTS: ElementId = ElementId::new("lobby/clear-toasts");
    pub const CASH_OUT: ElementId = ElementId::new("cash-out");
    pub const CANCEL: ElementId = ElementId::new("cash-out/cancel");
    pub const CONFIRM: ElementId = ElementId::new("cash-out/confirm");
}

const GAMES: &[(&str, &str)] = &[
    ("Blackjack", "Classic tables, 3:2 payout"),
    ("Roulette", "European single zero"),
    ("Baccarat", "Punto banco, no commission"),
    ("Golden Reels", "5 reels, 25 lines"),
    ("Lucky Sevens", "3 reels, progressive jackpot"),
    ("Texas Hold'em", "No-limit cash tables"),
    ("Craps", "Pass line and field bets"),
    ("Keno", "Draws every two minutes"),
    ("Dragon Tiger", "Fast single-card showdown"),
    ("Mega Wheel", "Spin for up to 500x"),
    ("Video Poker", "Jacks or better"),
    ("Sic Bo", "Three dice, many ways to win"),
];

/// Toolbar buttons that raise sample toasts, in focus order.
pub const TOAST_BUTTONS: &[(&str, Category, &str)] = &[
    ("lobby/toast-default", Category::Default, "Notify"),
    ("lobby/toast-success", Category::Success, "Win"),
    ("lobby/toast-info", Category::Info, "Bonus"),
    ("lobby/toast-warning", Category::Warning, "Low balance"),
    ("lobby/toast-error", Category::Error, "Spin failed"),
];

/// Sample text for a toast of the given category.
pub fn sample_message(category: Category) -> &'static str {
    match category {
        Category::Default => "Table 7 has an open seat",
        Category::Success => "You won $250.00 on Golden Reels!",
        Category::Info => "Daily bonus spins are ready",
        Category::Warning => "Your balance is running low",
        Category::Error => "Spin failed, your bet was refunded",
    }
}

/// Builds the lobby part of the focus tree.
pub fn lobby_focus_tree() -> FocusTree {
    let mut tree = FocusTree::new();
    tree.insert(None, ids::LOBBY, Focusability::None);
    for (id, _, _) in TOAST_BUTTONS {
        tree.insert(Some(&ids::LOBBY), *id, Focusability::Tabbable);
    }
    tree.insert(Some(&ids::LOBBY), "lobby/sticky-toast", Focusability::Tabbable);
    tree.insert(Some(&ids::LOBBY), ids::CLEAR_TOASTS, Focusability::Tabbable);
    tree.insert(Some(&ids::LOBBY), ids::OPEN_CASH_OUT, Focusability::Tabbable);
    tree
}

/// Formats a balance in cents as dollars.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Context required to render the lobby.
pub struct ViewContext<'a> {
    pub focus: &'a FocusTree,
    pub balance_cents: u64,
    pub scroll_locked: bool,
}

fn is_focused(focus: &FocusTree, id: &str) -> bool {
    focus
        .active_element()
        .is_some_and(|active| active.as_str() == id)
}

/// Renders the lobby page.
pub fn lobby<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            text("Golden Felt Lobby")
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(text(format!("Balance {}", format_cents(ctx.balance_cents))).size(typography::BODY));

    let mut toolbar = Row::new().spacing(spacing::XS);
    for (id, category, label) in TOAST_BUTTONS {
        toolbar = toolbar.push(
            button(text(*label).size(typography::BODY))
                .style(styles::button::secondary(is_focused(ctx.focus, id)))
                .on_press(Message::ShowToast(*category)),
        );
    }
    toolbar = toolbar
        .push(
            button(text("Verify email").size(typography::BODY))
                .style(styles::button::secondary(is_focused(
                    ctx.focus,
                    "lobby/sticky-toast",
                )))
                .on_press(Message::ShowStickyToast),
        )
        .push(
            button(text("Clear all").size(typography::BODY))
                .style(styles::button::secondary(is_focused(
                    ctx.focus,
                    ids::CLEAR_TOASTS.as_str(),
                )))
                .on_press(Message::ClearToasts),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("Cash out").size(typography::BODY))
                .style(styles::button::primary(is_focused(
                    ctx.focus,
                    ids::OPEN_CASH_OUT.as_str(),
                )))
                .on_press(Message::OpenCashOut),
        );

    let tiles = GAMES.iter().fold(
        Column::new().spacing(spacing::SM).padding(spacing::XS),
        |column, (name, blurb)| {
            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(text(*name).size(typography::TITLE_MD))
                        .push(text(*blurb).size(typography::CAPTION)),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::tile),
            )
        },
    );

    let games = scroll_gate(scrollable(tiles).height(Length::Fill)).locked(ctx.scroll_locked);

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header)
        .push(toolbar)
        .push(games);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::lobby)
        .into()
}

/// Renders the cash-out dialog actions.
pub fn cash_out_actions<'a>(focus: &FocusTree, balance_cents: u64) -> Element<'a, Message> {
    let is = |id: &ElementId| focus.active_element() == Some(id);

    let mut confirm = button(text("Confirm").size(typography::BODY))
        .style(styles::button::primary(is(&ids::CONFIRM)));
    if balance_cents > 0 {
        confirm = confirm.on_press(Message::ConfirmCashOut);
    }

    Column::new()
        .spacing(spacing::LG)
        .push(text(format!("Amount: {}", format_cents(balance_cents))).size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(text("Cancel").size(typography::BODY))
                        .style(styles::button::secondary(is(&ids::CANCEL)))
                        .on_press(Message::CloseCashOut),
                )
                .push(confirm),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_are_formatted_as_dollars() {
        assert_eq!(format_cents(125_000), "$1250.00");
        assert_eq!(format_cents(5), "$0.05");
    }

    #[test]
    fn lobby_tree_tabs_through_the_toolbar() {
        let tree = lobby_focus_tree();
        let order = tree.focusables_within(&ids::LOBBY);

        assert_eq!(order.len(), TOAST_BUTTONS.len() + 3);
        assert_eq!(order.last(), Some(&ids::OPEN_CASH_OUT));
    }

    #[test]
    fn every_category_has_sample_text() {
        for (_, category, _) in TOAST_BUTTONS {
            assert!(!sample_message(*category).trim().is_empty());
        }
    }
}
