pub mod breadcrumb;
pub mod channel;
pub mod media;
pub mod menu;
pub mod table;

pub use table::{Table, TableRow};

pub mod prelude {
    pub use crate::breadcrumb::{BreadcrumbTrail, Crumb};
    pub use crate::channel::{LatestReceiver, LatestSender, StreamReceiver, StreamSender};
    pub use crate::media::{Media, MediaObserver};
    pub use crate::menu::{Menu, MenuCondition, MenuContent, MenuItem, MenuView};
    pub use crate::table::{Area, Column, EventResult, Head, Region, SortOrder, TableRow};
    pub use crate::table::{ColumnCaps, Table, TableConfig, TableData, TableEvent};
    pub use crate::table::{PageShow, PageState, PaginatorConfig};

    pub use webdom::{Breakpoint, Css, Modifiers, PointerEvent, Rect, Tag};
}
