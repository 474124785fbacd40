
use serde_json::json;

use fuzzymf::fuzzyset::domain::Domain;
use fuzzymf::fuzzyset::fuzzysetmanager::FuzzySetManager;

fn main() {

    let definitions = vec![
        json!({"label": "cold", "color": "#1f77b4", "function": "leftShoulder", "parameters": [5.0, 15.0]}),
        json!({"label": "warm", "color": "#2ca02c", "function": "triangular", "parameters": [10.0, 20.0, 30.0]}),
        json!({"label": "hot", "color": "#d62728", "function": "rightShoulder", "parameters": [25.0, 35.0]}),
    ];
    let manager = FuzzySetManager::new();
    let _ = manager.insert_obj_from_json_vec(&definitions).unwrap();
    let domain = Domain::new(0.0, 40.0).unwrap();
    for label in ["cold", "warm", "hot"] {
        let set = manager.
            get(label).
            unwrap();
        let series = set.sample_or_zero(&domain, 9);
        print!("{:>6} {:>9}", set.label(), set.color());
        for point in series {
            print!(" ({:>4.1}, {:.3})", point.x(), point.y());
        }
        println!();
    }
}
