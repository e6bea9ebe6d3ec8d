mod dispatcher;
mod helpers;
mod remote;
