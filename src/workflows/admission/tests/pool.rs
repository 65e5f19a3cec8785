use super::common::*;
use crate::workflows::admission::{ApplicantPool, Department};

fn mixed_pool() -> ApplicantPool {
    ApplicantPool::new(vec![
        applicant("Ann", "A", [1, 1, 1, 1, 1], ["Physics", "Biotech", "Chemistry"]),
        applicant("Ben", "B", [2, 2, 2, 2, 2], ["Biotech", "Physics", "Chemistry"]),
        applicant("Cat", "C", [3, 3, 3, 3, 3], ["Physics", "Physics", "Physics"]),
        applicant("Dan", "D", [4, 4, 4, 4, 4], ["Law", "", "Biotech"]),
    ])
}

#[test]
fn filter_matches_rank_and_keeps_pool_order() {
    let pool = mixed_pool();

    let first_choice: Vec<String> = pool
        .filter_by_preference(0, Department::Physics)
        .into_iter()
        .map(|applicant| applicant.first_name)
        .collect();
    assert_eq!(first_choice, vec!["Ann", "Cat"]);

    let second_choice = pool.filter_by_preference(1, Department::Physics);
    assert_eq!(second_choice.len(), 2);
    assert_eq!(second_choice[0].first_name, "Ben");

    let third_choice = pool.filter_by_preference(2, Department::Biotech);
    assert_eq!(third_choice.len(), 1);
    assert_eq!(third_choice[0].first_name, "Dan");
}

#[test]
fn filter_ignores_ranks_past_third_choice() {
    let pool = mixed_pool();
    for department in Department::ALL {
        assert!(pool.filter_by_preference(3, department).is_empty());
    }
}

#[test]
fn remove_all_swaps_in_last_applicant() {
    let mut pool = mixed_pool();
    let ann = pool.iter().next().cloned().expect("first applicant");

    pool.remove_all(&[ann]);

    let remaining: Vec<&str> = pool.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(remaining, vec!["Dan", "Ben", "Cat"]);
}

#[test]
fn remove_all_skips_applicants_already_gone() {
    let mut pool = mixed_pool();
    let cat = pool
        .iter()
        .find(|a| a.first_name == "Cat")
        .cloned()
        .expect("cat present");
    let stranger = applicant("Eve", "E", [9, 9, 9, 9, 9], ["Physics", "Physics", "Physics"]);

    pool.remove_all(&[cat.clone(), cat, stranger]);

    assert_eq!(pool.len(), 3);
    assert!(pool.iter().all(|a| a.first_name != "Cat"));
}

#[test]
fn remove_all_uses_full_record_equality() {
    let twin_a = applicant("Sam", "S", [50, 50, 50, 50, 50], ["Physics", "Biotech", "Chemistry"]);
    let twin_b = applicant("Sam", "S", [60, 50, 50, 50, 50], ["Physics", "Biotech", "Chemistry"]);
    let mut pool = ApplicantPool::new(vec![twin_a, twin_b.clone()]);

    pool.remove_all(&[twin_b]);

    assert_eq!(pool.len(), 1);
    assert_eq!(pool.iter().next().map(|a| a.scores.physics), Some(50));
}
