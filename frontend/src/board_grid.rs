use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct BoardGridProps {
    /// Minimum card width in pixels; the grid fits as many columns as it can.
    #[prop_or(280)]
    pub min_column_px: u32,
    pub children: Children,
}

/// Responsive grid the status board lays its machine cards out on.
pub struct BoardGrid;

impl Component for BoardGrid {
    type Message = ();
    type Properties = BoardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BoardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 16px;
             width: 100%;
             margin: auto;",
            props.min_column_px
        );

        html! {
            <div class="board-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
