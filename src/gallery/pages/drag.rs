use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::components::{DragItem, DragPayload, DropOutcome, DropResult};
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

const ITEM_TYPE: &str = "phone-number";
const GROUP_NAMES: [&str; 2] = ["Sales", "Support"];

struct Drag {
    group: usize,
    item: usize,
    target: usize,
}

pub struct DragPage {
    groups: [Vec<DragItem>; 2],
    group: usize,
    selected: usize,
    drag: Option<Drag>,
    areas: [Vec<Rect>; 2],
}

impl DragPage {
    pub fn new() -> Self {
        let sales = ["+1 919 555 0142", "+1 415 555 0199", "+1 212 555 0100"]
            .into_iter()
            .map(|label| DragItem::new(ITEM_TYPE, label))
            .collect();
        let support = vec![
            DragItem::new(ITEM_TYPE, "+1 512 555 0175"),
            DragItem::new(ITEM_TYPE, "+1 800 555 0000 (locked)").can_drag(false),
        ];

        Self {
            groups: [sales, support],
            group: 0,
            selected: 0,
            drag: None,
            areas: [Vec::new(), Vec::new()],
        }
    }

    fn begin(&mut self) -> Action {
        let area = self.areas[self.group].get(self.selected).copied().unwrap_or_default();
        let Some(item) = self.groups[self.group].get_mut(self.selected) else {
            return Action::None;
        };
        match item.begin_drag(area) {
            Some(DragPayload { label, dimensions, .. }) => {
                self.drag = Some(Drag {
                    group: self.group,
                    item: self.selected,
                    target: self.group,
                });
                Action::Notify(format!("Dragging {label} ({}x{})", dimensions.width, dimensions.height))
            }
            None => Action::Notify(format!("{} cannot be dragged", item.label())),
        }
    }

    fn finish(&mut self, dropped: bool) -> Action {
        let Some(drag) = self.drag.take() else {
            return Action::None;
        };
        let outcome = DropOutcome(dropped.then(|| DropResult {
            drop_type: ITEM_TYPE.to_string(),
            group_index: drag.target,
        }));

        let mut moved_to = None;
        let Some(item) = self.groups[drag.group].get_mut(drag.item) else {
            return Action::None;
        };
        let label = item.label().to_string();
        item.end_drag(&outcome, |_, group_index| moved_to = Some(group_index));

        match moved_to {
            Some(target) if target != drag.group => {
                let item = self.groups[drag.group].remove(drag.item);
                self.groups[target].push(item);
                self.group = target;
                self.selected = self.groups[target].len() - 1;
                Action::Notify(format!("Moved {label} to {}", GROUP_NAMES[target]))
            }
            Some(_) => Action::Notify(format!("{label} dropped in place")),
            None => Action::Notify("Drag cancelled".to_string()),
        }
    }
}

impl Default for DragPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DragPage {
    fn title(&self) -> &'static str {
        "Drag"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.drag.is_some() {
            return match key.code {
                KeyCode::Left | KeyCode::Right => {
                    if let Some(drag) = self.drag.as_mut() {
                        drag.target = usize::from(key.code == KeyCode::Right);
                    }
                    Action::None
                }
                KeyCode::Enter => self.finish(true),
                KeyCode::Esc => self.finish(false),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Left => {
                self.group = 0;
                self.selected = 0;
            }
            KeyCode::Right => {
                self.group = 1;
                self.selected = 0;
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.groups[self.group].len().saturating_sub(1));
            }
            KeyCode::Char(' ') => return self.begin(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let [columns, hint] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(rect);
        let panes = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2).split(columns);

        for (index, pane) in panes.iter().enumerate() {
            let targeted = self.drag.as_ref().is_some_and(|drag| drag.target == index);
            let border = if targeted {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", GROUP_NAMES[index]));
            let inner = block.inner(*pane);
            f.render_widget(block, *pane);

            self.areas[index].clear();
            for (row, item) in self.groups[index].iter().enumerate() {
                let area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1).intersection(inner);
                self.areas[index].push(area);
                let themed = item.clone().symbols(ctx.symbols).themed(&ctx.registry);
                (&themed).render(area, f.buffer_mut());
                if index == self.group && row == self.selected && self.drag.is_none() {
                    f.buffer_mut().set_style(area, Style::default().add_modifier(Modifier::REVERSED));
                }
            }
        }

        let text = if self.drag.is_some() {
            "←/→ choose group · Enter drop · Esc cancel"
        } else {
            "←/→ group · ↑/↓ item · space pick up"
        };
        f.render_widget(Paragraph::new(text), hint);
    }
}
