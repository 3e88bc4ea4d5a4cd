//! HUD: key help + FPS report (top centre), quit button

use bevy::prelude::*;
use skyshot_simulation::stats::KEY_HELP;
use skyshot_simulation::{FrameReportReady, FrameSet};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud).add_systems(
            Update,
            (
                quit_button_pressed.in_set(FrameSet::Input),
                update_fps_text.in_set(FrameSet::Presentation),
            ),
        );
    }
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct QuitButton;

fn setup_hud(mut commands: Commands) {
    // Text will be updated once a FrameReport arrives
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_child((
            Text::new(format!("{}\nWait a bit to see FPS.", KEY_HELP)),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::srgb(0.3, 0.0, 0.3)),
            TextLayout::new_with_justify(JustifyText::Center),
            FpsText,
        ));

    commands.spawn((
        Name::new("Button Quit"),
        Button,
        QuitButton,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(116.0),
            width: Val::Px(32.0),
            height: Val::Px(32.0),
            ..default()
        },
        BackgroundColor(Color::srgb(0.35, 0.35, 0.4)),
    ));
}

fn update_fps_text(
    mut reports: EventReader<FrameReportReady>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(report) = reports.read().last() else {
        return;
    };

    for mut text in &mut query {
        text.0 = report.0.hud_text();
    }
}

fn quit_button_pressed(
    buttons: Query<&Interaction, (Changed<Interaction>, With<QuitButton>)>,
    mut exit: EventWriter<AppExit>,
) {
    if buttons.iter().any(|interaction| *interaction == Interaction::Pressed) {
        exit.write(AppExit::Success);
    }
}
