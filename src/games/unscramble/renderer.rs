//! Unscramble-specific renderer
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use super::game::{DialogChoice, Screen, UnscrambleGame};
use crate::core::renderer::Renderer;

pub struct UnscrambleRenderer;

impl Renderer<UnscrambleGame> for UnscrambleRenderer {
    fn render(frame: &mut Frame, game: &UnscrambleGame) {
        let state = game.state();

        let [header, word, hint, field, error, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(frame.area());

        let [count_area, score_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(header);
        frame.render_widget(
            Paragraph::new(format!("Word {} of {}", state.word_count(), state.max_words()))
                .block(Block::bordered()),
            count_area,
        );
        frame.render_widget(
            Paragraph::new(format!("Score: {}", state.score()))
                .alignment(Alignment::Right)
                .block(Block::bordered()),
            score_area,
        );

        frame.render_widget(
            Paragraph::new(state.scrambled_word())
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::bordered().title(" Unscramble ")),
            word,
        );
        frame.render_widget(
            Paragraph::new("Unscramble the word using all the letters.").alignment(Alignment::Center),
            hint,
        );

        let field_style = if game.has_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{}_", game.input()))
                .block(Block::bordered().title(" Enter your word ").border_style(field_style)),
            field,
        );
        if game.has_error() {
            frame.render_widget(
                Paragraph::new("Try again!").style(Style::default().fg(Color::Red)),
                error,
            );
        }

        frame.render_widget(
            Paragraph::new("Enter: submit   Tab: skip   Esc: quit")
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );

        if let Screen::FinalScore { selected } = game.screen() {
            render_final_score(frame, state.score(), selected);
        }
    }
}

fn render_final_score(frame: &mut Frame, score: u32, selected: DialogChoice) {
    let area = centered(frame.area(), 36, 8);
    frame.render_widget(Clear, area);

    let button = |label: &'static str, choice: DialogChoice| {
        if choice == selected {
            Span::styled(
                format!("[ {label} ]"),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        } else {
            Span::raw(format!("  {label}  "))
        }
    };

    let text = vec![
        Line::from(format!("You scored: {score}!")),
        Line::from(""),
        Line::from(vec![
            button("Exit", DialogChoice::Exit),
            Span::raw("   "),
            button("Play Again", DialogChoice::PlayAgain),
        ]),
        Line::from(""),
        Line::from(Span::styled("r: play again   q: exit", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" Congratulations! ")),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
