use anyhow::Result;
use roomsift_testing::TestWorld;
use roomsift_testing::assertions::{assert_count_label, assert_placeholder, assert_visible_ids};

const TODAY: &str = "2024-03-01";

fn run(world: &TestWorld, extra: &[&str]) -> Result<serde_json::Value> {
    let mut args = vec!["reservations", "reservations.json", "--today", TODAY];
    args.extend_from_slice(extra);
    world.run_json(&args)
}

#[test]
fn test_default_order_is_newest_check_in_first() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &[])?;
    // The undated reservation sorts as the oldest.
    assert_visible_ids(&json, &["R-050", "R-200", "R-100", "R-075", "R-300"])?;
    assert_count_label(&json, "5 reservas encontradas")?;
    Ok(())
}

#[test]
fn test_amount_desc() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &["--sort", "amount-desc"])?;
    assert_visible_ids(&json, &["R-200", "R-100", "R-075", "R-050", "R-300"])?;
    Ok(())
}

#[test]
fn test_status_filter_and_breakdown() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &["--status", "confirmada"])?;
    assert_visible_ids(&json, &["R-100", "R-300"])?;
    insta::assert_json_snapshot!(json["content"]["breakdown"], @r#"
    {
      "activa": 0,
      "cancelada": 0,
      "confirmada": 2,
      "other": 0,
      "pendiente": 0,
      "total": 2
    }
    "#);
    Ok(())
}

#[test]
fn test_date_buckets_keep_undated_reservations() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let upcoming = run(&world, &["--date", "upcoming"])?;
    assert_visible_ids(&upcoming, &["R-050", "R-200", "R-300"])?;

    let past = run(&world, &["--date", "past"])?;
    assert_visible_ids(&past, &["R-100", "R-075", "R-300"])?;

    let current = run(&world, &["--date", "current"])?;
    assert_visible_ids(&current, &["R-200", "R-300"])?;
    Ok(())
}

#[test]
fn test_search_over_card_text() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &["--search", "suite"])?;
    assert_visible_ids(&json, &["R-200", "R-100"])?;
    Ok(())
}

#[test]
fn test_no_match_shows_placeholder() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &["--status", "pendiente", "--date", "past"])?;
    assert_visible_ids(&json, &[])?;
    assert_count_label(&json, "0 reservas encontradas")?;
    assert_placeholder(&json, true)?;
    Ok(())
}

#[test]
fn test_unknown_sort_falls_back_to_default() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let json = run(&world, &["--sort", "price"])?;
    assert_visible_ids(&json, &["R-050", "R-200", "R-100", "R-075", "R-300"])?;
    Ok(())
}

#[test]
fn test_plain_output_lists_breakdown() -> Result<()> {
    let world = TestWorld::new().with_sample_reservations();

    let result = world.run(&[
        "reservations",
        "reservations.json",
        "--today",
        TODAY,
        "--status",
        "activa",
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("1 reserva encontrada"));
    assert!(result.stdout().contains("$1,250.00"));
    assert!(result.stdout().contains("activa 1"));
    Ok(())
}
