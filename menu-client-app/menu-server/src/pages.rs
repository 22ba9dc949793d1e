// ============================================================================
// Menu Server - Demo Pages
// File: menu-client-app/menu-server/src/pages.rs
// Description: Page components and their menu metadata
// ============================================================================

use menu_core::menu_item;
use menu_infrastructure::MenuRegistryBuilder;

pub struct Index;
pub struct Privacy;

menu_item!(Index, route = "/Index", label = "Home");
menu_item!(Privacy, route = "/Privacy", label = "Privacy");

/// Pages under `/MenuPages`.
pub mod menu_pages {
    use super::Privacy;
    use menu_core::menu_item;

    pub struct Impressum;
    pub struct SubImpressum1;
    pub struct SubImpressum2;
    pub struct SubPrivacy1;
    pub struct SubSubPrivacy1;
    pub struct Team;
    pub struct SubTeam1;
    pub struct SubTeam2;
    pub struct SubSubTeam1;
    pub struct SubSubSubTeam1;
    pub struct SubSubTeam2;

    menu_item!(Impressum, route = "/MenuPages/Impressum", label = "Impressum");
    menu_item!(SubImpressum1, route = "/MenuPages/SubImpressum1", label = "Subimpressum 1", parent = Impressum);
    menu_item!(SubImpressum2, route = "/MenuPages/SubImpressum2", label = "Subimpressum 2", parent = Impressum);

    menu_item!(SubPrivacy1, route = "/MenuPages/SubPrivacy1", label = "SubPrivacy 1", parent = Privacy);
    menu_item!(SubSubPrivacy1, route = "/MenuPages/SubSubPrivacy1", label = "SubSubPrivacy1", parent = SubPrivacy1);

    menu_item!(Team, route = "/MenuPages/Team", label = "Team");
    menu_item!(SubTeam1, route = "/MenuPages/SubTeam1", label = "SubTeam1", parent = Team);
    menu_item!(SubTeam2, route = "/MenuPages/SubTeam2", label = "SubTeam2", parent = Team);
    menu_item!(SubSubTeam1, route = "/MenuPages/SubSubTeam1", label = "SubSubTeam1", parent = SubTeam1);
    menu_item!(SubSubSubTeam1, route = "/MenuPages/SubSubSubTeam1", label = "SubSubSubTeam1", parent = SubSubTeam1);
    menu_item!(SubSubTeam2, route = "/MenuPages/SubSubTeam2", label = "SubSubTeam2", parent = SubTeam2);
}

/// Register every page, in the order the menu should list siblings.
pub fn register_pages(registry: MenuRegistryBuilder) -> MenuRegistryBuilder {
    use menu_pages::*;

    registry
        .register::<Index>()
        .register::<Privacy>()
        .register::<Impressum>()
        .register::<SubImpressum1>()
        .register::<SubImpressum2>()
        .register::<SubPrivacy1>()
        .register::<SubSubPrivacy1>()
        .register::<Team>()
        .register::<SubTeam1>()
        .register::<SubTeam2>()
        .register::<SubSubTeam1>()
        .register::<SubSubSubTeam1>()
        .register::<SubSubTeam2>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::{MenuNode, MenuTreeBuilder};
    use menu_infrastructure::MenuRegistry;

    fn labels(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn test_demo_menu_shape() {
        let registry = register_pages(MenuRegistry::builder()).freeze();
        let tree = MenuTreeBuilder::new(registry).build().unwrap();

        assert_eq!(labels(&tree), vec!["Home", "Privacy", "Impressum", "Team"]);
        assert!(tree[0].is_leaf());
        assert_eq!(labels(&tree[1].children), vec!["SubPrivacy 1"]);
        assert_eq!(labels(&tree[1].children[0].children), vec!["SubSubPrivacy1"]);
        assert_eq!(labels(&tree[2].children), vec!["Subimpressum 1", "Subimpressum 2"]);

        let team = &tree[3];
        assert_eq!(labels(&team.children), vec!["SubTeam1", "SubTeam2"]);
        assert_eq!(labels(&team.children[0].children), vec!["SubSubTeam1"]);
        assert_eq!(labels(&team.children[0].children[0].children), vec!["SubSubSubTeam1"]);
        assert_eq!(labels(&team.children[1].children), vec!["SubSubTeam2"]);
        assert_eq!(team.depth(), 4);
    }

    #[test]
    fn test_demo_menu_is_clean() {
        let registry = register_pages(MenuRegistry::builder()).freeze();
        let report = MenuTreeBuilder::new(registry).diagnose().unwrap();

        assert_eq!(report.declarations, 13);
        assert!(report.is_clean());
    }
}
