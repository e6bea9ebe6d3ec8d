mod local;
mod registry;
mod remote;
