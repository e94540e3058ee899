use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use trestle::prelude::*;

#[derive(Clone)]
struct Order {
    id: u64,
    customer: &'static str,
    total: &'static str,
    locked: bool,
}

impl TableRow for Order {
    fn id(&self) -> u64 {
        self.id
    }

    fn no_select(&self) -> bool {
        self.locked
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("orders.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let media = MediaObserver::new();
    media.update(390, 844);

    let (table, mut events) = Table::new();
    let table = table.with_media(media.subscribe());
    table.apply_config(order_config());

    println!("== phone viewport ==");
    report(&table);

    // Rotate to a desktop-sized viewport
    media.update(1280, 800);
    table.poll();
    println!("\n== desktop viewport ==");
    report(&table);

    // Pick two orders through the selection column
    let press = PointerEvent::click(24.0, 96.0).node(Tag::Td, Rect::new(8.0, 88.0, 32.0, 24.0));
    table.on_primary_click(&press, Area::SelectColumn, 0, 0);
    table.on_primary_click(&press, Area::SelectColumn, 2, 0);

    // Jump to the second page
    table.set_page_current(2);

    println!("\n== interactions ==");
    while let Some(event) = events.try_next() {
        match event {
            TableEvent::Selection { selected, .. } => {
                println!("selected order ids: {selected:?}");
            }
            TableEvent::Paginator { state, .. } => {
                println!("page {} of {}", state.current, state.max);
            }
            other => println!("{other:?}"),
        }
    }
    println!("group flag: {:?}", table.group_selected());

    Ok(())
}

fn order_config() -> TableConfig<Order> {
    let columns = vec![
        Column::new("Order").width(90.0),
        Column::new("Customer"),
        Column::new("Total").width(110.0).min_media(Breakpoint::Md),
    ];
    TableConfig::new()
        .head(Head::new(columns))
        .data(TableData::rows(orders()))
        .paginator(PaginatorConfig::new(42).show(PageShow::After))
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1001,
            customer: "Hargrove & Sons",
            total: "312.40",
            locked: false,
        },
        Order {
            id: 1002,
            customer: "Bellweather Ltd",
            total: "88.00",
            locked: true,
        },
        Order {
            id: 1003,
            customer: "Quint Freight",
            total: "1204.75",
            locked: false,
        },
        Order {
            id: 1004,
            customer: "Mares Canning",
            total: "67.10",
            locked: false,
        },
    ]
}

fn report(table: &Table<Order>) {
    let breakpoint = table.breakpoint();
    let visible = table.visible_columns();
    println!("breakpoint {breakpoint}, {} of 3 columns", visible.len());
    for n in &visible {
        if let Some(column) = table.column(*n) {
            println!("  {}", column.label);
        }
    }
    for (n, order) in table.rows().iter().enumerate() {
        println!(
            "  [{}] {} {} {}",
            table.row_name(n).unwrap_or_default(),
            order.id,
            order.customer,
            order.total
        );
    }
}
