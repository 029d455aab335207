use bitflags::bitflags;
use pikurosu_core as game;
use game::{Borders, GridCoord2, GridLayout, Level, Mark};
use yew::prelude::*;

use crate::levels;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// One game bound to one level: the engine plus the margins/clues derived for
/// rendering. Replaced wholesale when another level is picked.
#[derive(Clone, Debug, PartialEq)]
struct GameSession {
    engine: game::PlayEngine,
    layout: GridLayout,
}

impl GameSession {
    fn new(level: Level) -> Self {
        let layout = GridLayout::new(&level);
        Self {
            engine: game::PlayEngine::new(level),
            layout,
        }
    }

    fn fill(&mut self, pos: GridCoord2) -> bool {
        match self.layout.to_image(pos) {
            Some(coords) => self.engine.fill(coords).has_update(),
            None => false,
        }
    }

    fn toggle_mark(&mut self, pos: GridCoord2) -> bool {
        match self.layout.to_image(pos) {
            Some(coords) => self.engine.toggle_mark(coords).has_update(),
            None => false,
        }
    }

    /// Text shown inside a cell: the clue digit in the margins, the cross
    /// glyph on crossed image cells, nothing otherwise.
    fn cell_text(&self, pos: GridCoord2) -> String {
        match self.layout.to_image(pos) {
            Some(coords) => match self.engine.mark_at(coords) {
                Mark::Crossed => "⨯".to_string(),
                _ => String::new(),
            },
            None => self
                .layout
                .clue_at(pos)
                .map_or_else(String::new, |clue| clue.to_string()),
        }
    }

    fn cell_classes(&self, pos: GridCoord2) -> Classes {
        let mut class = classes!("square", border_classes(self.layout.borders(pos)));

        if let Some(coords) = self.layout.to_image(pos) {
            if self.engine.mark_at(coords).is_filled() {
                class.push("fill");
            }
            if self.engine.is_mistake(coords) {
                class.push("error");
            }
        }

        class
    }
}

fn border_classes(tags: Borders) -> Classes {
    const NAMES: [(Borders, &str); 8] = [
        (Borders::NO_LEFT, "no-border-left"),
        (Borders::NO_RIGHT, "no-border-right"),
        (Borders::NO_TOP, "no-border-top"),
        (Borders::NO_BOTTOM, "no-border-bottom"),
        (Borders::BOLD_LEFT, "bold-border-left"),
        (Borders::BOLD_RIGHT, "bold-border-right"),
        (Borders::BOLD_TOP, "bold-border-top"),
        (Borders::BOLD_BOTTOM, "bold-border-bottom"),
    ];

    NAMES
        .iter()
        .filter(|(tag, _)| tags.contains(*tag))
        .map(|(_, name)| *name)
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CellPointerState {
    pos: GridCoord2,
    buttons: MouseButtons,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellPointerState),
    SelectLevel(usize),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: GridCoord2,
    text: String,
    class: Classes,
    callback: Callback<CellPointerState>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        text,
        class,
        callback,
    } = props.clone();

    let pseudo_click = move |e: MouseEvent| {
        let buttons = MouseButtons::from_bits_truncate(e.buttons());
        callback.emit(CellPointerState { pos, buttons });
        log::trace!("{:?} pointer ({:?})", pos, buttons);
    };

    // Holding a button while sweeping over cells paints them, like a
    // click on each one.
    let onmousedown = {
        let pseudo_click = pseudo_click.clone();
        Callback::from(pseudo_click)
    };
    let onmouseenter = Callback::from(pseudo_click);

    html! {
        <td {class} {onmousedown} {onmouseenter}>{text}</td>
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    pub level: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    catalog: Vec<Level>,
    game: GameSession,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let catalog = levels::catalog();
        let index = ctx
            .props()
            .level
            .unwrap_or(0)
            .min(catalog.len().saturating_sub(1));
        let level = catalog
            .get(index)
            .expect("Level catalog is empty")
            .clone();

        Self {
            catalog,
            game: GameSession::new(level),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SelectLevel(index) => match self.catalog.get(index) {
                Some(level) => {
                    log::debug!("new game: {:?}", level.title());
                    self.game = GameSession::new(level.clone());
                    true
                }
                None => false,
            },
            CellEvent(CellPointerState { pos, buttons }) => {
                if buttons.contains(MouseButtons::LEFT) {
                    self.game.fill(pos)
                } else if buttons.contains(MouseButtons::RIGHT) {
                    self.game.toggle_mark(pos)
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.game.layout.full_size();
        let status = self.game.engine.status().to_string();

        html! {
            <div class="pikurosu" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <h2>{"New Game:"}</h2>
                    {
                        for self.catalog.iter().enumerate().map(|(index, level)| {
                            let onclick = ctx.link().callback(move |_| Msg::SelectLevel(index));
                            html! {
                                <button {onclick}>{level.title()}</button>
                            }
                        })
                    }
                </nav>
                <h2>{self.game.engine.level().title()}</h2>
                <h2 class="status">{status}</h2>
                <table>
                    {
                        for (0..rows).map(|i| html! {
                            <tr class="grid-row">
                                {
                                    for (0..cols).map(|j| {
                                        let pos = (i, j);
                                        let text = self.game.cell_text(pos);
                                        let class = self.game.cell_classes(pos);
                                        let callback = ctx.link().callback(Msg::CellEvent);
                                        html! {
                                            <CellView {pos} {text} {class} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
