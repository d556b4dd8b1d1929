//! End-to-end registry scenarios observed through the activity log

use std::sync::Arc;

use menagerie::{
    new_shared_service, Animal, AnimalService, AnimalType, Cat, Dog, Feedable, FeedPolicy,
    MemoryLog, ServiceConfig, SharedAnimalService,
};

fn service_with_log() -> (AnimalService, Arc<MemoryLog>) {
    let log = MemoryLog::shared();
    let service = AnimalService::with_config(ServiceConfig::default(), log.clone());
    (service, log)
}

fn is_hungry(service: &AnimalService, name: &str) -> bool {
    service
        .find_by_name(name)
        .and_then(Animal::feedable)
        .map(|feedable| feedable.is_hungry())
        .expect("animal should be registered and feedable")
}

#[test]
fn test_register_then_feed_all() {
    let (mut service, log) = service_with_log();

    service.register_animal(Dog::new("Rex", 3, "Labrador"));
    service.register_animal(Cat::new("Whiskers", 2, true));

    let report = service.feed_all("food").unwrap();

    assert!(!is_hungry(&service, "Rex"));
    assert!(is_hungry(&service, "Whiskers"));
    assert_eq!(report.fed, vec!["Rex", "Whiskers"]);

    let lines = log.lines();
    let feed_lines: Vec<&String> = lines.iter().filter(|l| l.contains(" eats ")).collect();
    assert_eq!(feed_lines, vec!["Rex eats food", "Whiskers eats food"]);
    assert_eq!(
        lines,
        vec![
            "Registered: Rex",
            "Registered: Whiskers",
            "Rex eats food",
            "Whiskers eats food",
        ]
    );
}

#[test]
fn test_registry_round_trip() {
    let (mut service, _log) = service_with_log();
    let names = ["Rex", "Whiskers", "Fido", "Tom", "Bella"];

    for (i, name) in names.iter().enumerate() {
        let age = i as u32 + 1;
        if i % 2 == 0 {
            service.register_animal(Dog::new(*name, age, "Mixed"));
        } else {
            service.register_animal(Cat::new(*name, age, i % 3 == 0));
        }
    }

    assert_eq!(service.get_animal_count(), names.len());
    for name in names {
        assert_eq!(service.find_by_name(name).map(Animal::name), Some(name));
    }
    assert!(service.find_by_name("Garfield").is_none());

    let dogs: Vec<&str> = service
        .get_animals_by_type(AnimalType::Dog)
        .into_iter()
        .map(Animal::name)
        .collect();
    assert_eq!(dogs, vec!["Rex", "Fido", "Bella"]);
    assert!(service.get_animals_by_type(AnimalType::Bird).is_empty());
}

#[test]
fn test_trick_learned_on_registered_dog() {
    let (mut service, log) = service_with_log();
    service.register_animal(Dog::new("Rex", 3, "Labrador"));
    log.clear();

    let rex = service
        .find_by_name_mut("Rex")
        .and_then(Animal::as_dog_mut)
        .unwrap();
    rex.learn_trick("fetch", &*log);
    rex.learn_trick("", &*log);

    let rex = service.find_by_name("Rex").and_then(Animal::as_dog).unwrap();
    assert_eq!(rex.tricks(), ["fetch"]);
    assert_eq!(log.lines(), vec!["Rex learned: fetch"]);
}

#[test]
fn test_standalone_dog_feed_round_trip() {
    let log = MemoryLog::new();
    let mut dog = Dog::new("Rex", 3, "Labrador");

    assert!(dog.is_hungry());
    assert!(dog.feed("", &log).is_err());
    assert!(dog.is_hungry());

    dog.feed("kibble", &log).unwrap();
    assert!(!dog.is_hungry());
}

#[test]
fn test_empty_food_aborts_batch_by_default() {
    let (mut service, log) = service_with_log();
    service.register_animal(Dog::new("Rex", 3, "Labrador"));
    service.register_animal(Cat::new("Whiskers", 2, true));
    log.clear();

    let err = service.feed_all("").unwrap_err();

    assert!(err.to_string().contains("Rex"));
    assert!(log.lines().is_empty());
    assert!(is_hungry(&service, "Rex"));
}

#[tokio::test]
async fn test_shared_service_from_spawned_tasks() {
    let log = MemoryLog::shared();
    let service: SharedAnimalService = new_shared_service(
        ServiceConfig {
            feed_policy: FeedPolicy::ContinueOnError,
        },
        log.clone(),
    );

    let mut handles = Vec::new();
    for i in 0..8u32 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let mut registry = service.write().await;
            registry.register_animal(Dog::new(format!("Dog{}", i), i, "Mixed"));
        }));
    }
    for handle in handles {
        handle.await.expect("Task panicked");
    }

    let report = service.write().await.feed_all("kibble").unwrap();
    assert_eq!(report.fed.len(), 8);

    let registry = service.read().await;
    assert_eq!(registry.get_animal_count(), 8);
    assert!(registry.animals().all(|a| !a.feedable().unwrap().is_hungry()));

    let registrations = log
        .lines()
        .iter()
        .filter(|l| l.starts_with("Registered: "))
        .count();
    assert_eq!(registrations, 8);
}
