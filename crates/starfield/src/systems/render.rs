use glam::Vec2;

use crate::components::ripple::Ripple;
use crate::components::shooting_star::ShootingStar;
use crate::components::star::Star;
use crate::renderer::draw_list::DrawList;
use crate::systems::collision::Link;

/// Build the draw list for one animated frame.
/// Layering, bottom to top: shooting stars, stars, ripples, links.
pub fn build_draw_list(
    list: &mut DrawList,
    bounds: Vec2,
    shooting_stars: &[ShootingStar],
    stars: &[Star],
    ripples: &[Ripple],
    links: &[Link],
) {
    list.clear();
    list.clear_surface(bounds.x, bounds.y);

    for s in shooting_stars {
        s.draw(list);
    }
    for s in stars {
        s.draw(list);
    }
    for r in ripples {
        r.draw(list);
    }
    for l in links {
        l.draw(list);
    }
}

/// Build the single frame shown when motion is reduced.
pub fn build_static_draw_list(list: &mut DrawList, bounds: Vec2, stars: &[Star]) {
    list.clear();
    list.clear_surface(bounds.x, bounds.y);
    for s in stars {
        s.draw(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::DrawKind;

    #[test]
    fn reuses_list_between_frames() {
        let stars = vec![Star::new(Vec2::new(1.0, 2.0), Vec2::ZERO, 1.0)];
        let mut list = DrawList::new();
        build_static_draw_list(&mut list, Vec2::new(10.0, 10.0), &stars);
        build_static_draw_list(&mut list, Vec2::new(10.0, 10.0), &stars);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_frame_still_clears() {
        let mut list = DrawList::new();
        build_draw_list(&mut list, Vec2::new(640.0, 480.0), &[], &[], &[], &[]);
        assert_eq!(list.len(), 1);
        let clear = list.iter().next().unwrap();
        assert_eq!(clear.kind(), Some(DrawKind::Clear));
        assert_eq!(clear.end(), Vec2::new(640.0, 480.0));
    }
}
