//! Alert presenter — AlertRaised/AlertExpired → UI text widgets
//!
//! Pure view: the AlertController decides lifetimes, we only mirror them.

use std::collections::HashMap;

use bevy::prelude::*;
use skyshot_simulation::{AlertExpired, AlertId, AlertRaised, FrameSet};

pub struct AlertPresenterPlugin;

impl Plugin for AlertPresenterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_alert_panel).add_systems(
            Update,
            (show_raised_alerts, hide_expired_alerts)
                .chain()
                .in_set(FrameSet::Presentation),
        );
    }
}

/// Column that stacks active alerts (newest at the bottom)
#[derive(Resource)]
pub struct AlertPanel {
    pub root: Entity,
    pub widgets: HashMap<AlertId, Entity>,
}

#[derive(Component)]
pub struct AlertWidget(pub AlertId);

fn setup_alert_panel(mut commands: Commands) {
    let root = commands
        .spawn((
            Name::new("Alert Panel"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(48.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .id();

    commands.insert_resource(AlertPanel {
        root,
        widgets: HashMap::new(),
    });
}

fn show_raised_alerts(
    mut commands: Commands,
    mut raised: EventReader<AlertRaised>,
    mut panel: ResMut<AlertPanel>,
) {
    for event in raised.read() {
        let widget = commands
            .spawn((
                AlertWidget(event.id),
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.75)),
            ))
            .with_child((
                Text::new(event.text.clone()),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.3)),
            ))
            .id();

        commands.entity(panel.root).add_child(widget);
        panel.widgets.insert(event.id, widget);
    }
}

fn hide_expired_alerts(
    mut commands: Commands,
    mut expired: EventReader<AlertExpired>,
    mut panel: ResMut<AlertPanel>,
) {
    for event in expired.read() {
        if let Some(widget) = panel.widgets.remove(&event.id) {
            commands.entity(widget).despawn();
        }
    }
}
