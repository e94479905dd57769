use checkflow::{Hit, Point, Scene, WorkspaceBuilder};

#[tokio::main]
async fn main() {
    let workspace = WorkspaceBuilder::new().samples(true).build().unwrap();

    for summary in workspace.summaries().unwrap() {
        println!("{} - {}% ({}/{}), next: {}", summary.title, summary.progress, summary.completed, summary.total, summary.next_task);
    }

    // work through a step
    let mut editor = workspace.open("2").unwrap();
    workspace.toggle_status(&mut editor, "n2").unwrap();
    println!("Weekly Newsletter progress: {}%", workspace.flow("2").unwrap().progress());

    // edit: move a step, append one and connect it
    editor.enter_edit();
    editor.pointer_down(Hit::Node("n3".into()), Point::new(100.0, 400.0));
    editor.pointer_move(Point::new(160.0, 400.0));
    editor.pointer_up();

    let added = editor.add_node(None).unwrap();
    editor.set_label(&added, "Review Analytics").unwrap();
    editor.toggle_connect().unwrap();
    editor.pointer_down(Hit::Node("n3".into()), Point::new(0.0, 0.0));
    editor.pointer_down(Hit::Node(added), Point::new(0.0, 0.0));
    let saved = workspace.save(&mut editor).unwrap();
    println!("Saved {} with {} steps and {} edges", saved.title, saved.nodes.len(), saved.edges.len());

    let imported = workspace.import_text("launch-plan.txt", "Pick a date\nWrite announcement\nPublish").unwrap();
    println!("Imported {} ({} steps)", imported.title, imported.nodes.len());

    if std::env::var(&workspace.config().generator.api_key_env).is_ok() {
        match workspace.generate("Hiring Process").await {
            Ok(flow) => println!("Generated {} ({} steps)", flow.title, flow.nodes.len()),
            Err(e) => println!("Generation failed: {:?}", e),
        }
    }

    println!("{}", Scene::for_flow(&saved).to_svg());
}
