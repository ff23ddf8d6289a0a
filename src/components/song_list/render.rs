// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the song list.
//!
//! While the first fetch is outstanding only a spinner and a status label are
//! drawn. After that the list is drawn as a column of cards, each with a
//! thumbnail cell, the song title and the artist.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::SongListView,
    model::{
        Song,
        song_list::{ListStatus, SongList},
    },
    render::icons::{ICON_NOTE, ICON_REFRESH, spinner_frame},
    theme::Theme,
};

const LOADING_LABEL: &str = "Loading songs\u{2026}";
const REFRESHING_LABEL: &str = "Refreshing\u{2026}";

const THUMBNAIL_WIDTH: usize = 4;

impl SongListView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        songs: &SongList,
        theme: &Theme,
        tick: usize,
    ) {
        match songs.status() {
            ListStatus::Loading => draw_loading(f, area, theme, tick),
            status => self.draw_list(f, area, songs, status, theme, tick),
        }
    }

    fn draw_list(
        &mut self,
        f: &mut Frame,
        area: Rect,
        songs: &SongList,
        status: ListStatus,
        theme: &Theme,
        tick: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(16)])
            .split(header_block.inner(chunks[0]));

        f.render_widget(header_block, chunks[0]);

        let title = Line::from(vec![
            Span::styled(
                "Songs",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            ),
            Span::styled(
                format!(" ({})", songs.items().len()),
                Style::default().fg(theme.muted_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(title), header_chunks[0]);

        if status == ListStatus::Refreshing {
            let indicator = Line::from(vec![
                Span::styled(spinner_frame(tick), Style::default().fg(theme.accent_colour)),
                Span::raw(" "),
                Span::styled(REFRESHING_LABEL, Style::default().fg(theme.muted_fg)),
            ]);
            f.render_widget(
                Paragraph::new(indicator).alignment(Alignment::Right),
                header_chunks[1],
            );
        } else {
            let hint = Span::styled(
                format!("{ICON_REFRESH} r"),
                Style::default().fg(theme.muted_fg),
            );
            f.render_widget(
                Paragraph::new(hint).alignment(Alignment::Right),
                header_chunks[1],
            );
        }

        let separator = "\u{2500}".repeat(usize::from(chunks[1].width));

        let items: Vec<ListItem> = songs
            .items()
            .iter()
            .map(|song| song_card(song, &separator, theme))
            .collect();

        let list = List::new(items).highlight_style(Style::default().bg(theme.highlight_bg));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

fn draw_loading(f: &mut Frame, area: Rect, theme: &Theme, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let text = Text::from(vec![
        Line::from(Span::styled(
            spinner_frame(tick),
            Style::default().fg(theme.accent_colour),
        )),
        Line::from(""),
        Line::from(Span::styled(
            LOADING_LABEL,
            Style::default().fg(theme.muted_fg),
        )),
    ]);

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), chunks[1]);
}

/// One song as a three line card: title, artist, then a separator.
fn song_card<'a>(song: &'a Song, separator: &str, theme: &Theme) -> ListItem<'a> {
    let (thumb_top, thumb_bottom) = thumbnail(song, theme);

    let title = Line::from(vec![
        thumb_top,
        Span::raw(" "),
        Span::styled(
            song.track_name.as_str(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme.title_fg),
        ),
    ]);

    let artist = Line::from(vec![
        thumb_bottom,
        Span::raw(" "),
        Span::styled(
            song.artist_name.as_str(),
            Style::default().fg(theme.muted_fg),
        ),
    ]);

    let divider = Line::from(Span::styled(
        separator.to_string(),
        Style::default().fg(theme.border_colour),
    ));

    ListItem::new(Text::from(vec![title, artist, divider]))
}

// Artwork cannot be drawn in a terminal, a tinted cell stands in for it. A
// song without artwork gets an empty gap instead.
fn thumbnail(song: &Song, theme: &Theme) -> (Span<'static>, Span<'static>) {
    let blank = " ".repeat(THUMBNAIL_WIDTH);

    if song.artwork_url.trim().is_empty() {
        return (Span::raw(blank.clone()), Span::raw(blank));
    }

    let style = Style::default().bg(theme.thumbnail_bg).fg(theme.thumbnail_fg);
    (
        Span::styled(format!(" {ICON_NOTE}  "), style),
        Span::styled(blank, style),
    )
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::model::song_list::tests::songs;

    fn render(view: &mut SongListView, list: &SongList) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.draw(f, area, list, &Theme::default(), 0);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn count_rows(screen: &str, needle: &str) -> usize {
        screen.lines().filter(|line| line.contains(needle)).count()
    }

    #[test]
    fn loading_shows_label_and_no_list() {
        let mut view = SongListView::new();
        let screen = render(&mut view, &SongList::new());

        assert!(screen.contains("Loading songs"));
        assert!(!screen.contains("Songs ("));
    }

    #[test]
    fn renders_one_card_per_song_in_order() {
        let mut view = SongListView::new();
        let mut list = SongList::new();
        list.set_results(songs(&[31, 11, 21]));

        let screen = render(&mut view, &list);

        assert!(!screen.contains("Loading songs"));
        assert!(screen.contains("Songs (3)"));
        assert_eq!(count_rows(&screen, "Track "), 3);
        assert_eq!(count_rows(&screen, "Artist "), 3);

        let first = screen.find("Track 31").unwrap();
        let second = screen.find("Track 11").unwrap();
        let third = screen.find("Track 21").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_list_renders_without_banner() {
        let mut view = SongListView::new();
        let mut list = SongList::new();
        list.fetch_failed();

        let screen = render(&mut view, &list);

        assert!(screen.contains("Songs (0)"));
        assert_eq!(count_rows(&screen, "Track "), 0);
        assert!(!screen.to_lowercase().contains("error"));
    }

    #[test]
    fn refresh_indicator_is_shown_while_refreshing() {
        let mut view = SongListView::new();
        let mut list = SongList::new();
        list.set_results(songs(&[1]));
        list.begin_refresh();

        let screen = render(&mut view, &list);
        assert!(screen.contains("Refreshing"));
        assert!(screen.contains("Track 1"));

        list.set_results(songs(&[1]));
        let screen = render(&mut view, &list);
        assert!(!screen.contains("Refreshing"));
    }

    #[test]
    fn record_without_track_id_renders_as_a_card() {
        let mut view = SongListView::new();
        let mut keyless = songs(&[9]).remove(0);
        keyless.track_id = None;
        keyless.track_name = String::new();
        keyless.artist_name = "Narrator".into();

        let mut list = SongList::new();
        let mut items = songs(&[1, 2]);
        items.insert(1, keyless);
        list.set_results(items);

        let screen = render(&mut view, &list);
        assert!(screen.contains("Songs (3)"));
        assert_eq!(count_rows(&screen, "Track "), 2);
        assert!(screen.contains("Narrator"));
    }

    #[test]
    fn missing_artwork_leaves_a_gap() {
        let mut song = songs(&[5]).remove(0);
        song.artwork_url = String::new();

        let (top, bottom) = thumbnail(&song, &Theme::default());
        assert_eq!(top.content, "    ");
        assert_eq!(top.style, Style::default());
        assert_eq!(bottom.content, "    ");

        song.artwork_url = "https://example.com/a.jpg".into();
        let (top, _) = thumbnail(&song, &Theme::default());
        assert!(top.content.contains(ICON_NOTE));
    }
}
