use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    /// Relative width of each column, e.g. `[0.65, 0.35]`.
    pub columns: Vec<f32>,
    pub children: Children,
}

/// Side-by-side panes with bordered cells.
pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let template = props
            .columns
            .iter()
            .map(|fraction| format!("{}fr", fraction))
            .collect::<Vec<_>>()
            .join(" ");
        let style = format!(
            "display: grid;
             grid-template-columns: {};
             gap: 16px;
             align-items: start;",
            template
        );

        html! {
            <div class="workspace-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
