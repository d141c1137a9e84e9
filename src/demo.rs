use crate::diagram::{Diagram, Interaction};

/// The built-in example shown when no flow file is given.
pub fn diagram() -> Diagram {
    let mut d = Diagram::new("Flow");
    for entity in ["Comp2", "Comp3", "Comp1", "Comp4"] {
        d.add_entity(entity);
    }

    d.add_interaction(
        Interaction::new("Comp2", "Comp4", "add_subscriber()").with_note("init_subscriber_cb"),
    );
    d.add_interaction(
        Interaction::new("Comp1", "Comp3", "add_resource()").with_note("init and release cb"),
    );
    d.add_interaction(
        Interaction::new("Comp3", "Comp4", "add_component_resource()")
            .with_result("component resource added"),
    );
    d.add_interaction(Interaction::new("Comp3", "Comp1", "resource added"));
    d.add_interaction(Interaction::new("Comp4", "Comp2", "init_subscriber_cb()"));
    d.add_interaction(Interaction::new("Comp2", "Comp1", "execute init_cb"));
    d
}
