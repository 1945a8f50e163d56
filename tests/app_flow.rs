mod common;

use common::{config_for, healthy_backend, serve};
use enade_dash::App;
use std::time::Duration;

/// Wait for spawned loads to finish, then apply their events
async fn settle(app: &mut App) {
    for _ in 0..300 {
        if app.pending() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    app.process_events();
}

#[tokio::test]
async fn test_start_loads_overview() {
    let addr = serve(healthy_backend()).await;
    let mut app = App::new(config_for(addr)).unwrap();

    app.start();
    settle(&mut app).await;

    assert_eq!(app.state.areas.ready().map(Vec::len), Some(2));
    assert_eq!(app.state.summary.ready().unwrap()[0].value, "8.571");
    assert!(app.state.similar.ready().is_some());
    assert!(app.state.extremes.is_none());
    assert_eq!(app.state.charts.live_count(), 3);
    app.shutdown();
}

#[tokio::test]
async fn test_last_selection_wins() {
    let addr = serve(healthy_backend()).await;
    let mut app = App::new(config_for(addr)).unwrap();
    app.start();
    settle(&mut app).await;

    let last = "CIÊNCIA DA COMPUTAÇÃO";
    app.select_area(Some("DIREITO".to_string()));
    app.select_area(Some(last.to_string()));
    settle(&mut app).await;

    assert_eq!(app.state.selected_area.as_deref(), Some(last));
    let section = app.state.extremes.as_ref().unwrap();
    assert_eq!(section.area, last);
    // The backend echoes the requested area as the lowest Q27 entry
    let cards = section.cards.ready().unwrap();
    let q27 = cards.iter().find(|c| c.question == "Q27").unwrap();
    assert_eq!(q27.lowest[0].0, last);
    assert!(app.state.priority_list.ready().is_some());

    app.select_area(None);
    settle(&mut app).await;
    assert!(app.state.extremes.is_none());
    assert!(app.state.detail_table.ready().is_some());
    app.shutdown();
}
