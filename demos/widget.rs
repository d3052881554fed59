use crossterm::event::{Event, KeyCode, MouseEventKind};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Terminal;

use tui_binary_tree::{Rendering, TreeNode, TreePrinter, TreeView};

struct App {
    rendering: Rendering,
    offset: usize,
}

impl App {
    fn new() -> tui_binary_tree::Result<Self> {
        let tree = balanced(6, 0).expect("at least one level");
        let rendering = TreePrinter::new().render(Some(&tree))?;
        Ok(Self {
            rendering,
            offset: 0,
        })
    }

    fn scroll_down(&mut self, lines: usize) {
        self.offset = self
            .offset
            .saturating_add(lines)
            .min(self.rendering.height().saturating_sub(1));
    }

    fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }
}

fn balanced(levels: u32, offset: u32) -> Option<TreeNode<u32>> {
    if levels == 0 {
        return None;
    }
    let half = 1 << (levels - 1);
    Some(TreeNode::new(
        offset + half,
        balanced(levels - 1, offset),
        balanced(levels - 1, offset + half),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new()?;

    // Terminal initialization
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, app);

    // restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            let widget = TreeView::new(&app.rendering)
                .block(
                    Block::bordered()
                        .title("Binary Tree")
                        .title_bottom(format!(
                            "{}x{} offset {}",
                            app.rendering.width(),
                            app.rendering.height(),
                            app.offset
                        )),
                )
                .style(Style::new().fg(Color::LightGreen))
                .offset(app.offset);
            frame.render_widget(widget, area);
        })?;

        match crossterm::event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(3),
                KeyCode::PageUp => app.scroll_up(3),
                KeyCode::Home => app.offset = 0,
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_down(1),
                MouseEventKind::ScrollUp => app.scroll_up(1),
                _ => {}
            },
            _ => {}
        }
    }
}
