use std::{
    io::{stdin, stdout, Write},
    sync::mpsc,
    thread,
    time::Instant,
};

use log::{debug, info, trace, warn};
use termion::{
    event::{Event, Key, MouseButton, MouseEvent},
    input::{MouseTerminal, TermRead},
    raw::IntoRawMode,
    screen::AlternateScreen,
};

use crate::{pos, Coin, Config, DenseWorld, Error, Pos, State, World};

pub use canvas::{Canvas, Glyph, Tint};
mod canvas;

pub use layout::{Layout, RESTART_BUTTON, UI_HEIGHT};
mod layout;

pub const BACKGROUND: Tint = Tint(10, 10, 20);
pub const UI_BAR: Tint = Tint(30, 30, 60);
pub const BUTTON: Tint = Tint(200, 50, 50);
pub const LABEL: Tint = Tint(255, 255, 255);
pub const SAND: Tint = Tint(230, 200, 80);

const BUTTON_LABEL: &str = "Restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Reset,
    TogglePause,
    /// left button pressed, in canvas coordinates
    Press(Pos),
    /// pointer moved with some button held; termion does not say which
    Drag(Pos),
    Release,
}

/// Maps a raw terminal event to the command it stands for.
pub fn translate(event: Event) -> Option<InputCmd> {
    let command = match event {
        Event::Key(Key::Char('q')) | Event::Key(Key::Esc) | Event::Key(Key::Ctrl('c')) => {
            InputCmd::Exit
        }
        Event::Key(Key::Char('r')) => InputCmd::Reset,
        Event::Key(Key::Char(' ')) => InputCmd::TogglePause,
        Event::Mouse(MouseEvent::Press(MouseButton::Left, x, y)) => {
            InputCmd::Press(Layout::from_terminal(x, y))
        }
        Event::Mouse(MouseEvent::Hold(x, y)) => InputCmd::Drag(Layout::from_terminal(x, y)),
        Event::Mouse(MouseEvent::Release(_, _)) => InputCmd::Release,
        _ => return None,
    };
    Some(command)
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for event in stdin().events() {
        let event = match event {
            Ok(event) => event,
            Err(err) => {
                warn!("stopped reading input: {err}");
                return;
            }
        };
        if let Some(command) = translate(event) {
            if sender.send(command).is_err() {
                return;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Pointer and pause state carried between frames.
#[derive(Debug)]
pub struct Controls {
    layout: Layout,
    pointer: Option<Pos>,
    paused: bool,
}

impl Controls {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            pointer: None,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn apply<W>(&mut self, command: InputCmd, state: &mut State<W>) -> Flow
    where
        W: World,
    {
        match command {
            InputCmd::Exit => return Flow::Exit,
            InputCmd::Reset => {
                debug!("grid cleared from keyboard");
                state.reset();
            }
            InputCmd::TogglePause => {
                self.paused = !self.paused;
                debug!("paused: {}", self.paused);
            }
            InputCmd::Press(pos) => self.pointer = Some(pos),
            InputCmd::Drag(pos) => {
                if self.pointer.is_some() {
                    self.pointer = Some(pos);
                }
            }
            InputCmd::Release => self.pointer = None,
        }
        Flow::Continue
    }

    /// Acts on a held button, once per frame even if the pointer is still.
    pub fn hold<W>(&self, state: &mut State<W>)
    where
        W: World,
    {
        let Some(pos) = self.pointer else { return };
        if self.layout.in_ui_bar(pos) {
            if self.layout.is_inside_button(pos) {
                state.reset();
            }
        } else if let Some(cell) = self.layout.canvas_to_grid(pos) {
            state.paint(cell);
        }
    }
}

fn drain_inputs<W>(
    receiver: &mpsc::Receiver<InputCmd>,
    controls: &mut Controls,
    state: &mut State<W>,
) -> Flow
where
    W: World,
{
    while let Ok(command) = receiver.try_recv() {
        if controls.apply(command, state) == Flow::Exit {
            return Flow::Exit;
        }
    }
    Flow::Continue
}

/// Paints the control bar and the settled grid.
pub fn draw<W>(canvas: &mut Canvas, layout: &Layout, world: &W, paused: bool)
where
    W: World,
{
    canvas.layer(|pos| layout.in_ui_bar(pos).then_some(Glyph::blank(UI_BAR)));
    canvas.layer(|pos| layout.is_inside_button(pos).then_some(Glyph::blank(BUTTON)));

    let label_x = RESTART_BUTTON.x + (RESTART_BUTTON.w - BUTTON_LABEL.len() as i32) / 2;
    let label_y = RESTART_BUTTON.y + RESTART_BUTTON.h / 2;
    canvas.text(pos!(label_x, label_y), BUTTON_LABEL, LABEL, BUTTON);

    let status = format!(
        "grains {}  {}  [space] pause  [r] reset  [q] quit",
        world.filled_count(),
        if paused { "paused " } else { "running" },
    );
    let status_x = RESTART_BUTTON.x + RESTART_BUTTON.w + 2;
    canvas.text(pos!(status_x, label_y), &status, LABEL, UI_BAR);

    let sand = Glyph::blank(SAND);
    for cell in world.filled() {
        canvas.put(layout.grid_to_canvas(cell), sand);
    }
}

/// Runs the frame loop until the user quits.
pub fn run(config: &Config) -> Result<(), Error> {
    let screen = stdout().into_raw_mode()?;
    let mut screen = AlternateScreen::from(MouseTerminal::from(screen));
    write!(screen, "{}", termion::cursor::Hide)?;

    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut state = State::<DenseWorld>::new(config.width, config.height);
    let layout = Layout::new(config.width, config.height);
    let mut controls = Controls::new(layout);
    let mut coin = config.coin();
    info!(
        "running {}x{} grid every {:?}",
        config.width, config.height, config.tick
    );

    let result = frame_loop(
        &mut screen,
        &receiver,
        &mut controls,
        &mut state,
        &mut coin,
        config,
    );

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;
    result
}

fn frame_loop<W>(
    screen: &mut impl Write,
    receiver: &mpsc::Receiver<InputCmd>,
    controls: &mut Controls,
    state: &mut State<W>,
    coin: &mut impl Coin,
    config: &Config,
) -> Result<(), Error>
where
    W: World,
{
    let layout = Layout::new(state.width(), state.height());
    loop {
        let started = Instant::now();

        if drain_inputs(receiver, controls, state) == Flow::Exit {
            info!("exit requested");
            return Ok(());
        }
        controls.hold(state);

        if !controls.is_paused() {
            let report = state.tick(coin);
            trace!("moved {} grains", report.moved);
        }

        let mut canvas = Canvas::from_screen(BACKGROUND)?;
        draw(&mut canvas, &layout, state.view(), controls.is_paused());
        canvas.display(screen)?;

        thread::sleep(config.tick.saturating_sub(started.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn fixture() -> (Controls, State<DenseWorld>) {
        let layout = Layout::new(10, 5);
        (Controls::new(layout), State::new(10, 5))
    }

    #[test]
    fn keys_and_mouse_translate() {
        assert_eq!(translate(Event::Key(Key::Char('q'))), Some(InputCmd::Exit));
        assert_eq!(translate(Event::Key(Key::Char('r'))), Some(InputCmd::Reset));
        assert_eq!(
            translate(Event::Key(Key::Char(' '))),
            Some(InputCmd::TogglePause)
        );
        assert_eq!(
            translate(Event::Mouse(MouseEvent::Press(MouseButton::Left, 3, 5))),
            Some(InputCmd::Press(pos!(2, 4)))
        );
        assert_eq!(
            translate(Event::Mouse(MouseEvent::Hold(1, 1))),
            Some(InputCmd::Drag(pos!(0, 0)))
        );
        assert_eq!(
            translate(Event::Mouse(MouseEvent::Release(1, 1))),
            Some(InputCmd::Release)
        );
        assert_eq!(
            translate(Event::Mouse(MouseEvent::Press(MouseButton::Right, 3, 5))),
            None
        );
        assert_eq!(translate(Event::Key(Key::Char('x'))), None);
    }

    #[test]
    fn held_pointer_paints_every_frame() {
        let (mut controls, mut state) = fixture();
        let target = pos!(4, UI_HEIGHT + 1);
        controls.apply(InputCmd::Press(target), &mut state);
        controls.hold(&mut state);
        assert_eq!(state.get(pos!(4, 1)), Cell::Filled);

        state.reset();
        controls.hold(&mut state);
        assert_eq!(state.get(pos!(4, 1)), Cell::Filled);

        controls.apply(InputCmd::Release, &mut state);
        state.reset();
        controls.hold(&mut state);
        assert!(state.filled().is_empty());
    }

    #[test]
    fn drag_without_left_press_does_not_paint() {
        let (mut controls, mut state) = fixture();
        // a right-button drag arrives as a bare hold
        controls.apply(InputCmd::Drag(pos!(4, UI_HEIGHT + 1)), &mut state);
        controls.hold(&mut state);
        assert!(state.filled().is_empty());

        controls.apply(InputCmd::Press(pos!(4, UI_HEIGHT + 1)), &mut state);
        controls.apply(InputCmd::Drag(pos!(6, UI_HEIGHT + 2)), &mut state);
        controls.hold(&mut state);
        assert_eq!(state.filled(), vec![pos!(6, 2)]);

        controls.apply(InputCmd::Release, &mut state);
        controls.apply(InputCmd::Drag(pos!(1, UI_HEIGHT)), &mut state);
        controls.hold(&mut state);
        assert_eq!(state.filled(), vec![pos!(6, 2)]);
    }

    #[test]
    fn pointer_off_the_grid_is_dropped() {
        let (mut controls, mut state) = fixture();
        controls.apply(InputCmd::Press(pos!(40, UI_HEIGHT + 1)), &mut state);
        controls.hold(&mut state);
        controls.apply(InputCmd::Press(pos!(20, 1)), &mut state);
        controls.hold(&mut state);
        assert!(state.filled().is_empty());
    }

    #[test]
    fn restart_button_clears() {
        let (mut controls, mut state) = fixture();
        state.paint(pos!(1, 1));
        controls.apply(InputCmd::Press(pos!(3, 1)), &mut state);
        controls.hold(&mut state);
        assert!(state.filled().is_empty());
    }

    #[test]
    fn reset_and_pause_commands() {
        let (mut controls, mut state) = fixture();
        state.paint(pos!(2, 2));
        assert_eq!(controls.apply(InputCmd::Reset, &mut state), Flow::Continue);
        assert!(state.filled().is_empty());

        controls.apply(InputCmd::TogglePause, &mut state);
        assert!(controls.is_paused());
        controls.apply(InputCmd::TogglePause, &mut state);
        assert!(!controls.is_paused());

        assert_eq!(controls.apply(InputCmd::Exit, &mut state), Flow::Exit);
    }

    #[test]
    fn drain_stops_at_exit() {
        let (mut controls, mut state) = fixture();
        let (sender, receiver) = mpsc::channel();
        sender.send(InputCmd::TogglePause).unwrap();
        sender.send(InputCmd::Exit).unwrap();
        sender.send(InputCmd::TogglePause).unwrap();
        assert_eq!(drain_inputs(&receiver, &mut controls, &mut state), Flow::Exit);
        assert!(controls.is_paused());
        assert_eq!(
            drain_inputs(&receiver, &mut controls, &mut state),
            Flow::Continue
        );
        assert!(!controls.is_paused());
    }

    #[test]
    fn draw_places_sand_under_the_bar() {
        let mut state = State::<DenseWorld>::new(10, 5);
        state.paint(pos!(3, 2));
        let layout = Layout::new(10, 5);
        let mut canvas = Canvas::new(60, 10, BACKGROUND);
        draw(&mut canvas, &layout, state.view(), false);

        assert_eq!(canvas.get(pos!(3, 2 + UI_HEIGHT)), Some(Glyph::blank(SAND)));
        assert_eq!(canvas.get(pos!(4, 2 + UI_HEIGHT)), Some(Glyph::blank(BACKGROUND)));
        assert_eq!(canvas.get(pos!(RESTART_BUTTON.x, 0)), Some(Glyph::blank(BUTTON)));
        assert_eq!(canvas.get(pos!(0, 0)), Some(Glyph::blank(UI_BAR)));
        let label: String = (3..10)
            .filter_map(|x| canvas.get(pos!(x, 1)).map(|glyph| glyph.char))
            .collect();
        assert_eq!(label, "Restart");
    }
}
