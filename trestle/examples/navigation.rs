use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use trestle::prelude::*;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("navigation.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let media = MediaObserver::new();
    let menu = Menu::new();
    let trail = BreadcrumbTrail::new();

    menu.set_content(
        MenuContent::new(vec![
            MenuItem::new("urn:orders").name("Orders").sticker(3),
            MenuItem::new("urn:customers").name("Customers"),
            MenuItem::new("urn:archive").name("Archive").disabled(),
        ])
        .title("Back office"),
    );

    // Desktop first: the menu opens on its own
    media.update(1440, 900);
    menu.apply_media(&media.media());
    show(&menu);

    // Shrink to a phone: an open menu gets out of the way
    media.update(390, 844);
    menu.apply_media(&media.media());
    show(&menu);

    // The user opens the menu and picks a section
    menu.toggle();
    show(&menu);
    menu.select("urn:orders");
    show(&menu);

    trail.set(vec![Crumb::link("Back office", "/"), Crumb::new("Orders")]);
    for (n, crumb) in trail.crumbs().iter().enumerate() {
        let kind = if trail.is_link(n) { "link" } else { "text" };
        println!("crumb {n}: {} ({kind})", crumb.name);
    }

    Ok(())
}

fn show(menu: &Menu) {
    let condition = menu.condition();
    println!(
        "menu {} on {}, current {:?}",
        condition.view,
        if condition.is_mobile { "mobile" } else { "desktop" },
        condition.current
    );
}
