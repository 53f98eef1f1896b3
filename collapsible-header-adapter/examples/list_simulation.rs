use collapsible_header::{Insets, LayoutRect, ScrollEvent, Tween};
use collapsible_header_adapter::{
    ContainerKind, ContainerProps, HeaderRenderProps, ScrollContainerWithHeaders, ScrollPrimitive,
};
use tracing_subscriber::EnvFilter;

/// A stand-in for a UI toolkit's list widget.
#[derive(Debug, Default)]
struct FakeList {
    offset: f32,
    animation: Option<Tween>,
    pending_scroll_to: Option<(f32, bool)>,
}

impl ScrollPrimitive for FakeList {
    fn kind(&self) -> ContainerKind {
        ContainerKind::FlatList
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        self.pending_scroll_to = Some((offset, animated));
    }

    fn polled_offset(&self) -> Option<f32> {
        Some(self.offset)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example: a flat list whose small header fades in once the large title scrolls away.
    let props = ContainerProps::new(|p: &HeaderRenderProps| {
        format!("[nav bar | title opacity {:.2}]", p.show_nav_bar.get())
    })
    .with_large_header(|p: &HeaderRenderProps| {
        format!("LARGE TITLE (scroll_y={:.0})", p.scroll_y.get())
    })
    .with_on_scroll_end_drag(|ev| println!("caller saw drag end at {}", ev.content_offset.y));

    let mut list = match ScrollContainerWithHeaders::new(FakeList::default(), props) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("setup failed: {err}");
            return;
        }
    };
    list.on_large_header_layout(LayoutRect::from_size(390.0, 96.0), 0);

    // The user drags to 70 and lets go.
    let mut now_ms = 0u64;
    list.on_scroll_begin_drag(&ScrollEvent::at(0.0));
    for y in (0..=70).step_by(10) {
        now_ms += 16;
        list.primitive_mut().offset = y as f32;
        list.tick(now_ms);
    }
    list.on_scroll_end_drag(&ScrollEvent::at(70.0), now_ms);

    let safe_area = Insets {
        top: 47.0,
        bottom: 34.0,
        left: 0.0,
        right: 0.0,
    };
    for _ in 0..30 {
        now_ms += 16;
        list.tick(now_ms);

        // The host plays any requested scroll animation.
        let primitive = list.primitive_mut();
        if let Some((to, _animated)) = primitive.pending_scroll_to.take() {
            primitive.animation = Some(Tween::new(
                primitive.offset,
                to,
                now_ms,
                200,
                Default::default(),
            ));
        }
        if let Some(tween) = primitive.animation {
            primitive.offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                primitive.animation = None;
            }
        }

        if now_ms % 64 == 0 {
            let frame = list.render(safe_area);
            println!(
                "t={now_ms}ms {} / {:?}",
                frame.header.node(),
                frame.leading.large_header.as_ref().map(|h| h.node().clone())
            );
        }
    }

    println!("done: {:?}", list.engine().snapshot());
}
