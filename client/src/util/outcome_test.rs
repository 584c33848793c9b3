use super::*;
use yoga::Route;

#[test]
fn target_path_follows_route_navigation() {
    let outcome = Outcome::navigate(Route::Sessions).with_notice("Session deleted !");
    assert_eq!(target_path(&outcome).as_deref(), Some("/sessions"));
}

#[test]
fn back_and_stay_have_no_target() {
    assert_eq!(target_path(&Outcome::back()), None);
    assert_eq!(target_path(&Outcome::none()), None);
}
